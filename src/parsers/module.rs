use anyhow::{Result, anyhow};
use swc_common::{FileName, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax};

/// Parse compiled module source into an AST.
///
/// The source is parsed with the module goal, so `import`/`export` statements
/// emitted by the CSS loader are accepted. Recoverable parser errors are
/// treated the same as fatal ones: a module that does not parse cleanly
/// produces no declaration at all.
pub fn parse_module_source(code: &str, file_path: &str) -> Result<Module> {
    let source_map = SourceMap::default();
    let source_file =
        source_map.new_source_file(FileName::Real(file_path.into()).into(), code.to_string());

    let syntax = Syntax::Es(EsSyntax::default());
    let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
    let module = parser
        .parse_module()
        .map_err(|e| anyhow!("Failed to parse module {}: {:?}", file_path, e))?;

    if let Some(err) = parser.take_errors().into_iter().next() {
        return Err(anyhow!("Failed to parse module {}: {:?}", file_path, err));
    }

    Ok(module)
}
