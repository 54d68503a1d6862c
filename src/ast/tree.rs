use std::fmt;

use crate::{
    ast::{Expr, FunctionDef, LiteralValue, Program, Statement},
    util::num::format_number,
};

const INDENT: &str = "  ";

/// Displays a program as an indented tree, one node per line.
///
/// String literals are written quoted and escaped, so the quoted text lexes
/// back to the same string.
///
/// # Example
/// ```
/// use wisam::{ast::tree::Tree, parse};
///
/// let parsed = parse("اكتب \"س\"");
///
/// assert_eq!(Tree(&parsed.program).to_string(), "Program\n  Print\n    String \"س\"\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Tree<'a>(pub &'a Program);

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program")?;
        render_block(f, self.0, 1)
    }
}

/// Renders `program` with [`Tree`].
///
/// # Example
/// ```
/// use wisam::{ast::tree::render, parse};
///
/// let parsed = parse("ليكن س = 1 + 2");
///
/// assert_eq!(render(&parsed.program),
///            "Program\n  Let س\n    BinaryOp +\n      Number 1\n      Number 2\n");
/// ```
#[must_use]
pub fn render(program: &Program) -> String {
    Tree(program).to_string()
}

fn render_block(f: &mut fmt::Formatter<'_>, program: &Program, depth: usize) -> fmt::Result {
    for statement in &program.statements {
        render_statement(f, statement, depth)?;
    }
    Ok(())
}

fn line(f: &mut fmt::Formatter<'_>, depth: usize, text: impl fmt::Display) -> fmt::Result {
    writeln!(f, "{}{text}", INDENT.repeat(depth))
}

fn render_statement(f: &mut fmt::Formatter<'_>, statement: &Statement, depth: usize) -> fmt::Result {
    match statement {
        Statement::Let { name, value, .. } => {
            line(f, depth, format_args!("Let {name}"))?;
            render_expr(f, value, depth + 1)?;
        },
        Statement::Const { name, value, .. } => {
            line(f, depth, format_args!("Const {name}"))?;
            render_expr(f, value, depth + 1)?;
        },
        Statement::Assign { name, value, .. } => {
            line(f, depth, format_args!("Assign {name}"))?;
            render_expr(f, value, depth + 1)?;
        },
        Statement::CompoundAssign { name, op, value, .. } => {
            line(f, depth, format_args!("CompoundAssign {name} {op}="))?;
            render_expr(f, value, depth + 1)?;
        },
        Statement::If { condition,
                        then_branch,
                        else_branch,
                        .. } => {
            line(f, depth, "If")?;
            render_expr(f, condition, depth + 1)?;
            line(f, depth + 1, "Then")?;
            render_block(f, then_branch, depth + 2)?;
            if let Some(else_branch) = else_branch {
                line(f, depth + 1, "Else")?;
                render_block(f, else_branch, depth + 2)?;
            }
        },
        Statement::For { var, start, end, body, .. } => {
            line(f, depth, format_args!("For {var}"))?;
            render_expr(f, start, depth + 1)?;
            render_expr(f, end, depth + 1)?;
            line(f, depth + 1, "Body")?;
            render_block(f, body, depth + 2)?;
        },
        Statement::While { condition, body, .. } => {
            line(f, depth, "While")?;
            render_expr(f, condition, depth + 1)?;
            line(f, depth + 1, "Body")?;
            render_block(f, body, depth + 2)?;
        },
        Statement::Function(FunctionDef { name, params, body, .. }) => {
            line(f, depth, format_args!("Function {name}({})", params.join(", ")))?;
            render_block(f, body, depth + 1)?;
        },
        Statement::Return { value, .. } => {
            line(f, depth, "Return")?;
            if let Some(value) = value {
                render_expr(f, value, depth + 1)?;
            }
        },
        Statement::Print { value, .. } => {
            line(f, depth, "Print")?;
            render_expr(f, value, depth + 1)?;
        },
        Statement::Break { .. } => line(f, depth, "Break")?,
        Statement::Continue { .. } => line(f, depth, "Continue")?,
        Statement::Expression { expr, .. } => {
            line(f, depth, "Expression")?;
            render_expr(f, expr, depth + 1)?;
        },
    }
    Ok(())
}

fn render_expr(f: &mut fmt::Formatter<'_>, expr: &Expr, depth: usize) -> fmt::Result {
    match expr {
        Expr::Literal { value, .. } => match value {
            LiteralValue::Number(n) => line(f, depth, format_args!("Number {}", format_number(*n)))?,
            LiteralValue::Str(s) => line(f, depth, format_args!("String {}", quote(s)))?,
            LiteralValue::Bool(b) => line(f, depth, format_args!("Bool {b}"))?,
            LiteralValue::Null => line(f, depth, "Null")?,
        },
        Expr::Identifier { name, .. } => line(f, depth, format_args!("Identifier {name}"))?,
        Expr::UnaryOp { op, expr, .. } => {
            line(f, depth, format_args!("UnaryOp {op}"))?;
            render_expr(f, expr, depth + 1)?;
        },
        Expr::BinaryOp { left, op, right, .. } => {
            line(f, depth, format_args!("BinaryOp {op}"))?;
            render_expr(f, left, depth + 1)?;
            render_expr(f, right, depth + 1)?;
        },
        Expr::FunctionCall { name, arguments, .. } => {
            line(f, depth, format_args!("Call {name}"))?;
            for argument in arguments {
                render_expr(f, argument, depth + 1)?;
            }
        },
        Expr::Array { elements, .. } => {
            line(f, depth, "Array")?;
            for element in elements {
                render_expr(f, element, depth + 1)?;
            }
        },
        Expr::Input { prompt, .. } => match prompt {
            Some(prompt) => line(f, depth, format_args!("Input {}", quote(prompt)))?,
            None => line(f, depth, "Input")?,
        },
    }
    Ok(())
}

/// Quotes `text` as a double-quoted string literal.
#[must_use]
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{interpreter::lexer::Lexer, parse};

    #[test]
    fn nested_blocks_are_indented() {
        let parsed = parse("إذا س > 1 إذن\n  اكتب س\nوإلا\n  توقف\nانتهى");

        assert_eq!(render(&parsed.program),
                   "Program\n  If\n    BinaryOp >\n      Identifier س\n      Number 1\n    \
                    Then\n      Print\n        Identifier س\n    Else\n      Break\n");
    }

    #[test]
    fn empty_program_and_formatting_through_display() {
        let parsed = parse("");
        assert_eq!(render(&parsed.program), "Program\n");

        let parsed = parse("اكتب ادخل \"الاسم\"");
        assert_eq!(format!("{}", Tree(&parsed.program)),
                   "Program\n  Print\n    Input \"الاسم\"\n");
    }

    #[test]
    fn quoted_strings_lex_back_unchanged() {
        for text in ["سطر\nجديد", "علامة \"اقتباس\"", "شرطة \\ مائلة", "\t{س}"] {
            let tokens = Lexer::new(&quote(text)).tokenize();
            assert_eq!(tokens[0].text, text);
            assert_eq!(tokens.len(), 2);
        }
    }

    #[test]
    fn functions_list_their_parameters() {
        let parsed = parse("دالة جمع أ ب\nأعد أ + ب\nانتهى");

        assert_eq!(render(&parsed.program),
                   "Program\n  Function جمع(أ, ب)\n    Return\n      BinaryOp +\n        \
                    Identifier أ\n        Identifier ب\n");
    }
}
