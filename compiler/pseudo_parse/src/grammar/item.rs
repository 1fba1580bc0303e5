//! `PROGRAM` and `MODULE` definitions.

use pseudo_ir::{Keyword, ModuleDef, ProgramDef, TokenKind};
use pseudo_lexer::LineSource;

use crate::{ErrorContext, ParseError, Parser};

impl<S: LineSource> Parser<S> {
    /// `PROGRAM name BEGIN statements END`
    pub(crate) fn parse_program(&mut self) -> Result<ProgramDef, ParseError> {
        self.parse_program_inner()
            .map_err(|e| e.in_context(ErrorContext::Program))
    }

    fn parse_program_inner(&mut self) -> Result<ProgramDef, ParseError> {
        let pos = self.expect_keyword(Keyword::Program)?.pos;
        let (name, _) = self.expect_ident("program name")?;

        self.lexer.nest();
        self.skip_eos()?;
        self.expect_keyword(Keyword::Begin)?;
        let (body, _) = self.parse_statements(&[])?;
        self.lexer.unnest();

        Ok(ProgramDef { name, body, pos })
    }

    /// `MODULE name (PARAM p)* BEGIN statements END`
    pub(crate) fn parse_module(&mut self) -> Result<ModuleDef, ParseError> {
        self.parse_module_inner()
            .map_err(|e| e.in_context(ErrorContext::Module))
    }

    fn parse_module_inner(&mut self) -> Result<ModuleDef, ParseError> {
        let pos = self.expect_keyword(Keyword::Module)?.pos;
        let (name, _) = self.expect_ident("module name")?;

        self.lexer.nest();
        let mut params = Vec::new();
        loop {
            self.skip_eos()?;
            let tok = self.bump()?;
            match tok.kind {
                TokenKind::Keyword(Keyword::Param) => {
                    let (param, _) = self.expect_ident("parameter name")?;
                    params.push(param);
                }
                TokenKind::Keyword(Keyword::Begin) => break,
                other => {
                    return Err(ParseError::expected("`PARAM` or `BEGIN`", other, tok.pos));
                }
            }
        }
        let (body, _) = self.parse_statements(&[])?;
        self.lexer.unnest();

        Ok(ModuleDef {
            name,
            params,
            body,
            pos,
        })
    }
}
