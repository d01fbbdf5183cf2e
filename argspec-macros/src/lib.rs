mod ast;
mod parse;
mod emit;

#[proc_macro]
pub fn spec(_ts: proc_macro::TokenStream) -> proc_macro::TokenStream {
    // Stub out the code, but let rust-analyzer resolve the invocation
    #[cfg(not(test))]
    {
        let text = match parse::spec(_ts) {
            Ok(cmd) => emit::emit(&cmd),
            Err(err) => format!("compile_error!({:?})", format!("invalid spec syntax, {err}")),
        };
        text.parse().unwrap()
    }
    #[cfg(test)]
    unimplemented!()
}

#[cfg(test)]
pub fn compile(src: &str) -> String {
    use proc_macro2::TokenStream;

    let ts = src.parse::<TokenStream>().unwrap();
    let cmd = parse::spec(ts).unwrap();
    emit::emit(&cmd)
}
