//! Compile filter JSON into a WHERE fragment

use super::CliError;
use crate::compiler::{CompileOptions, Compiler};

/// Inputs of the compile command
#[derive(Debug, Clone, Default)]
pub struct CompileRequest {
    /// Column the rules compare against
    pub target: String,
    /// Filter JSON
    pub filter: Option<String>,
    pub options: CompileOptions,
}

/// Compile the request's filter. `None` means the filter was empty.
pub fn execute_compile(request: &CompileRequest) -> Result<Option<String>, CliError> {
    let text = request.filter.as_deref().ok_or(CliError::NoInput)?;
    let compiler = Compiler::with_options(request.options);
    Ok(compiler.compile_json(text, &request.target)?)
}
