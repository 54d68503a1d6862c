use logos::Logos;

use crate::error::LexError;

/// The Arabic keyword table.
///
/// Maps every accepted spelling of a keyword to its [`TokenKind`].
pub mod keyword;

/// The kind of a lexical token.
///
/// `TokenKind` doubles as the raw logos token: the lexer matches one of these
/// patterns, then [`Lexer`] attaches the source text and position. Keyword
/// kinds carry no pattern of their own; they are produced by looking up every
/// matched identifier in [`keyword::keyword`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `ليكن`
    Let,
    /// `ثابت`
    Const,
    /// `إذا`
    If,
    /// `إذن`
    Then,
    /// `وإلا`
    Else,
    /// `انتهى`
    End,
    /// `لكل`
    For,
    /// `من`
    From,
    /// `إلى`
    To,
    /// `دالة`
    Function,
    /// `أعد`
    Return,
    /// `طالما`
    While,
    /// `توقف`
    Break,
    /// `استمر`
    Continue,
    /// `و`
    And,
    /// `أو`
    Or,
    /// `ليس` and `!`
    #[token("!")]
    Not,
    /// `فارغ`
    Null,
    /// `صحيح`
    True,
    /// `خطأ`
    False,
    /// `اكتب`
    Print,
    /// `ادخل`
    Input,

    /// `هيكل` (reserved)
    Struct,
    /// `صنف` (reserved)
    Class,
    /// `استورد` (reserved)
    Import,
    /// `أنشئ` (reserved)
    Create,
    /// `باسم` (reserved)
    As,
    /// `في` (reserved)
    In,
    /// `حاول` (reserved)
    Try,
    /// `امسك` (reserved)
    Catch,
    /// `أخيراً` (reserved)
    Finally,
    /// `ألقِ` (reserved)
    Throw,
    /// `حسب` (reserved)
    Switch,
    /// `حالة` (reserved)
    Case,
    /// `افتراضي` (reserved)
    Default,
    /// `نفذ` (reserved)
    Do,
    /// `حتى` (reserved)
    Until,
    /// `لكل_عنصر` (reserved)
    Foreach,
    /// `أنتج` (reserved)
    Yield,
    /// `غير_متزامن` (reserved)
    Async,
    /// `انتظر` (reserved)
    Await,
    /// `عام` (reserved)
    Public,
    /// `خاص` (reserved)
    Private,
    /// `محمي` (reserved)
    Protected,
    /// `ثابت_الصنف` (reserved)
    Static,
    /// `يرث` (reserved)
    Extends,
    /// `ينفذ` (reserved)
    Implements,
    /// `جديد` (reserved)
    New,
    /// `هذا` (reserved)
    This,
    /// `أب` (reserved)
    Super,
    /// `نوع` (reserved)
    Typeof,
    /// `حجم` (reserved)
    Sizeof,
    /// `عقل` (reserved)
    Mind,
    /// `منظومة` (reserved)
    System,
    /// `تعلم` (reserved)
    Learn,
    /// `اسأل` (reserved)
    Ask,
    /// `استجب` (reserved)
    Response,
    /// `احفظ` (reserved)
    Save,
    /// `حمل` (reserved)
    Load,
    /// `درب` (reserved)
    Train,
    /// `شبكة_عصبية` (reserved)
    Neural,
    /// `طبقات` (reserved)
    Layers,
    /// `معدل_تعلم` (reserved)
    LearningRate,
    /// `نموذج` (reserved)
    Model,
    /// `تنبأ` (reserved)
    Predict,
    /// `مجموعة_بيانات` (reserved)
    Dataset,

    /// Numeric literal tokens: digits with at most one decimal point, such as
    /// `42` or `3.14`. The text is converted to a number by the parser.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    /// String literals delimited by `"` or `'`. A missing closing quote
    /// consumes the rest of the input, including a final lone `\`.
    #[regex(r#""([^"\\]|\\[\s\S])*(\\|"?)"#, allow_greedy = true)]
    #[regex(r"'([^'\\]|\\[\s\S])*(\\|'?)", allow_greedy = true)]
    String,
    /// Identifier tokens made of ASCII letters, digits, underscores and Arabic
    /// letters. Arabic punctuation (`،`, `؛`, `؟`) is excluded.
    #[regex(r"[A-Za-z_\x{0600}-\x{060B}\x{060D}-\x{061A}\x{061C}-\x{061E}\x{0620}-\x{06FF}\x{0750}-\x{077F}\x{FB50}-\x{FDFF}\x{FE70}-\x{FEFF}][A-Za-z0-9_\x{0600}-\x{060B}\x{060D}-\x{061A}\x{061C}-\x{061E}\x{0620}-\x{06FF}\x{0750}-\x{077F}\x{FB50}-\x{FDFF}\x{FE70}-\x{FEFF}]*")]
    Identifier,

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `%`
    #[token("%")]
    Modulo,
    /// `^`
    #[token("^")]
    Power,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEq,
    /// `<=`
    #[token("<=")]
    LessEq,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `%=`
    #[token("%=")]
    ModAssign,
    /// `++`
    #[token("++")]
    Increment,
    /// `--`
    #[token("--")]
    Decrement,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `&`
    #[token("&")]
    BitAnd,
    /// `|`
    #[token("|")]
    BitOr,
    /// `~`
    #[token("~")]
    BitNot,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,` or the Arabic comma `،`
    #[token(",")]
    #[token("،")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `:`
    #[token(":")]
    Colon,
    /// `;` or the Arabic semicolon `؛`
    #[token(";")]
    #[token("؛")]
    Semicolon,
    /// Line break; statements are newline separated.
    #[token("\n")]
    Newline,
    /// End of input. Never matched, appended by [`Lexer::tokenize`].
    Eof,

    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Whitespace,
}

impl TokenKind {
    /// The upper-case display name of the kind, e.g. `GREATER_EQ`.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Let => "LET",
            Self::Const => "CONST",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::For => "FOR",
            Self::From => "FROM",
            Self::To => "TO",
            Self::Function => "FUNCTION",
            Self::Return => "RETURN",
            Self::While => "WHILE",
            Self::Break => "BREAK",
            Self::Continue => "CONTINUE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Null => "NULL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Print => "PRINT",
            Self::Input => "INPUT",
            Self::Struct => "STRUCT",
            Self::Class => "CLASS",
            Self::Import => "IMPORT",
            Self::Create => "CREATE",
            Self::As => "AS",
            Self::In => "IN",
            Self::Try => "TRY",
            Self::Catch => "CATCH",
            Self::Finally => "FINALLY",
            Self::Throw => "THROW",
            Self::Switch => "SWITCH",
            Self::Case => "CASE",
            Self::Default => "DEFAULT",
            Self::Do => "DO",
            Self::Until => "UNTIL",
            Self::Foreach => "FOREACH",
            Self::Yield => "YIELD",
            Self::Async => "ASYNC",
            Self::Await => "AWAIT",
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
            Self::Protected => "PROTECTED",
            Self::Static => "STATIC",
            Self::Extends => "EXTENDS",
            Self::Implements => "IMPLEMENTS",
            Self::New => "NEW",
            Self::This => "THIS",
            Self::Super => "SUPER",
            Self::Typeof => "TYPEOF",
            Self::Sizeof => "SIZEOF",
            Self::Mind => "MIND",
            Self::System => "SYSTEM",
            Self::Learn => "LEARN",
            Self::Ask => "ASK",
            Self::Response => "RESPONSE",
            Self::Save => "SAVE",
            Self::Load => "LOAD",
            Self::Train => "TRAIN",
            Self::Neural => "NEURAL",
            Self::Layers => "LAYERS",
            Self::LearningRate => "LEARNING_RATE",
            Self::Model => "MODEL",
            Self::Predict => "PREDICT",
            Self::Dataset => "DATASET",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Identifier => "IDENTIFIER",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Modulo => "MODULO",
            Self::Power => "POWER",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::Greater => "GREATER",
            Self::Less => "LESS",
            Self::GreaterEq => "GREATER_EQ",
            Self::LessEq => "LESS_EQ",
            Self::PlusAssign => "PLUS_ASSIGN",
            Self::MinusAssign => "MINUS_ASSIGN",
            Self::MulAssign => "MUL_ASSIGN",
            Self::DivAssign => "DIV_ASSIGN",
            Self::ModAssign => "MOD_ASSIGN",
            Self::Increment => "INCREMENT",
            Self::Decrement => "DECREMENT",
            Self::ShiftLeft => "SHIFT_LEFT",
            Self::ShiftRight => "SHIFT_RIGHT",
            Self::BitAnd => "BIT_AND",
            Self::BitOr => "BIT_OR",
            Self::BitNot => "BIT_NOT",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Colon => "COLON",
            Self::Semicolon => "SEMICOLON",
            Self::Newline => "NEWLINE",
            Self::Eof => "EOF",
            Self::Comment => "COMMENT",
            Self::Whitespace => "WHITESPACE",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexical unit with its source position.
///
/// `text` is the matched source text, except for strings, where it is the
/// unescaped content without quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The literal text of the token.
    pub text:   String,
    /// 1-based source line.
    pub line:   usize,
    /// 1-based source column, counted in characters.
    pub column: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind,
               text: text.into(),
               line,
               column }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({}, {:?}, {}:{})", self.kind, self.text, self.line, self.column)
    }
}

/// Tracks the line and the byte offset where the current line starts.
struct Cursor {
    line:       usize,
    line_start: usize,
}

impl Cursor {
    fn column(&self, source: &str, offset: usize) -> usize {
        source[self.line_start..offset].chars().count() + 1
    }

    /// Moves past `text`, which starts at byte `start` of the source.
    fn pass(&mut self, text: &str, start: usize) {
        for (index, ch) in text.char_indices() {
            if ch == '\n' {
                self.line += 1;
                self.line_start = start + index + 1;
            }
        }
    }
}

/// Converts source text into a flat sequence of [`Token`]s.
///
/// Tokenization never fails: characters that start no token are skipped and
/// recorded as [`LexError`]s, retrievable through [`Lexer::errors`] after the
/// call.
///
/// # Example
/// ```
/// use wisam::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("ليكن س = 5");
/// let kinds: Vec<TokenKind> = lexer.tokenize().iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Let,
///             TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Number,
///             TokenKind::Eof]);
/// assert!(lexer.errors().is_empty());
/// ```
pub struct Lexer<'src> {
    source: &'src str,
    errors: Vec<LexError>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self { source,
               errors: Vec::new() }
    }

    /// Tokenizes the whole source, always ending with an `EOF` token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut cursor = Cursor { line:       1,
                                  line_start: 0, };
        let mut raw = TokenKind::lexer(self.source);

        while let Some(result) = raw.next() {
            let span = raw.span();
            let slice = raw.slice();
            let line = cursor.line;
            let column = cursor.column(self.source, span.start);

            match result {
                Ok(kind) => {
                    let kind = match kind {
                        TokenKind::Identifier => keyword::keyword(slice).unwrap_or(kind),
                        other => other,
                    };
                    let text = match kind {
                        TokenKind::String => unescape(slice),
                        TokenKind::Comma => ",".to_string(),
                        TokenKind::Semicolon => ";".to_string(),
                        _ => slice.to_string(),
                    };
                    tokens.push(Token::new(kind, text, line, column));
                },
                Err(()) => {
                    for (offset, character) in slice.chars().enumerate() {
                        let error = LexError::UnknownCharacter { character,
                                                                 line,
                                                                 column: column + offset };
                        tracing::warn!(%error, "skipping unknown character");
                        self.errors.push(error);
                    }
                },
            }

            cursor.pass(slice, span.start);
        }

        let column = cursor.column(self.source, self.source.len());
        tokens.push(Token::new(TokenKind::Eof, "", cursor.line, column));

        tracing::debug!(tokens = tokens.len(), errors = self.errors.len(), "tokenized source");
        tokens
    }

    /// The lexical errors collected by the last [`Lexer::tokenize`] call.
    #[must_use]
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Consumes the lexer, returning its collected errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }
}

/// Strips the quotes from a string literal and resolves its escapes.
///
/// A `\` with nothing after it ends an unterminated literal and is dropped.
fn unescape(raw: &str) -> String {
    let mut chars = raw.chars();
    let Some(quote) = chars.next() else {
        return String::new();
    };

    let mut value = String::with_capacity(raw.len());
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some('n') => value.push('\n'),
                Some('t') => value.push('\t'),
                Some('r') => value.push('\r'),
                Some(other) => value.push(other),
                None => break,
            },
            c if c == quote => break,
            c => value.push(c),
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).tokenize().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn let_statement_tokens_and_positions() {
        let tokens = Lexer::new("ليكن س = 5").tokenize();

        assert_eq!(tokens,
                   vec![Token::new(TokenKind::Let, "ليكن", 1, 1),
                        Token::new(TokenKind::Identifier, "س", 1, 6),
                        Token::new(TokenKind::Assign, "=", 1, 8),
                        Token::new(TokenKind::Number, "5", 1, 10),
                        Token::new(TokenKind::Eof, "", 1, 11)]);
    }

    #[test]
    fn longest_match_for_two_character_operators() {
        assert_eq!(kinds(">="), [TokenKind::GreaterEq, TokenKind::Eof]);
        assert_eq!(kinds("== != <= << >> += -= *= /= %= ++ --"),
                   [TokenKind::Equal,
                    TokenKind::NotEqual,
                    TokenKind::LessEq,
                    TokenKind::ShiftLeft,
                    TokenKind::ShiftRight,
                    TokenKind::PlusAssign,
                    TokenKind::MinusAssign,
                    TokenKind::MulAssign,
                    TokenKind::DivAssign,
                    TokenKind::ModAssign,
                    TokenKind::Increment,
                    TokenKind::Decrement,
                    TokenKind::Eof]);
        assert_eq!(kinds("> ="), [TokenKind::Greater, TokenKind::Assign, TokenKind::Eof]);
    }

    #[test]
    fn newlines_are_tokens_and_advance_lines() {
        let tokens = Lexer::new("اكتب 1\n  اكتب 2").tokenize();
        let second_print = &tokens[3];

        assert_eq!(tokens[2].kind, TokenKind::Newline);
        assert_eq!((second_print.kind, second_print.line, second_print.column),
                   (TokenKind::Print, 2, 3));
    }

    #[test]
    fn comments_and_whitespace_are_skipped() {
        assert_eq!(kinds("# تعليق\n\t5 # آخر"),
                   [TokenKind::Newline, TokenKind::Number, TokenKind::Eof]);
    }

    #[test]
    fn string_escapes_are_resolved() {
        let tokens = Lexer::new(r#""a\n\t\"b\\" 'c\'d'"#).tokenize();

        assert_eq!(tokens[0].text, "a\n\t\"b\\");
        assert_eq!(tokens[1].text, "c'd");
    }

    #[test]
    fn unterminated_string_runs_to_end_of_input() {
        let mut lexer = Lexer::new("اكتب \"بلا نهاية\n5");
        let tokens = lexer.tokenize();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::String);
        assert_eq!(tokens[1].text, "بلا نهاية\n5");
        assert_eq!((tokens[2].line, tokens[2].column), (2, 2));
        assert!(lexer.errors().is_empty());
    }

    #[test]
    fn unterminated_string_may_end_in_a_backslash() {
        for source in ["اكتب \"abc\\", "اكتب 'abc\\"] {
            let mut lexer = Lexer::new(source);
            let tokens = lexer.tokenize();

            assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
                       [TokenKind::Print, TokenKind::String, TokenKind::Eof]);
            assert_eq!(tokens[1].text, "abc");
            assert!(lexer.errors().is_empty(), "{source}: {:?}", lexer.errors());
        }
    }

    #[test]
    fn numbers_take_at_most_one_decimal_point() {
        let tokens = Lexer::new("3.14.5").tokenize();

        assert_eq!(tokens[0].text, "3.14");
        assert_eq!(tokens[1].kind, TokenKind::Dot);
        assert_eq!(tokens[2].text, "5");
    }

    #[test]
    fn unknown_characters_are_recorded_and_skipped() {
        let mut lexer = Lexer::new("5 @ 6");
        let tokens = lexer.tokenize();

        assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
                   [TokenKind::Number, TokenKind::Number, TokenKind::Eof]);
        assert_eq!(lexer.errors(),
                   [LexError::UnknownCharacter { character: '@',
                                                 line:      1,
                                                 column:    3, }]);
    }

    #[test]
    fn arabic_punctuation_is_not_part_of_identifiers() {
        let tokens = Lexer::new("أ،ب؛").tokenize();

        assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
                   [TokenKind::Identifier,
                    TokenKind::Comma,
                    TokenKind::Identifier,
                    TokenKind::Semicolon,
                    TokenKind::Eof]);
        assert_eq!(tokens[1].text, ",");
        assert_eq!(tokens[3].text, ";");
    }

    #[test]
    fn identifiers_mix_scripts_digits_and_underscores() {
        let tokens = Lexer::new("عدد_1 x2 _y").tokenize();

        assert!(tokens[..3].iter().all(|t| t.kind == TokenKind::Identifier));
        assert_eq!(tokens[0].text, "عدد_1");
    }

    #[test]
    fn bang_and_keyword_not_share_a_kind() {
        assert_eq!(kinds("! ليس"), [TokenKind::Not, TokenKind::Not, TokenKind::Eof]);
    }
}
