use super::TokenKind;

/// Defines the keyword table from a list of spellings.
///
/// Several spellings may map to the same kind; hamza and non-hamza forms of
/// a word are both accepted.
///
/// The macro produces:
/// - `KEYWORDS` (public list of every spelling with its kind),
/// - `keyword` (lookup from a word to its kind).
macro_rules! keywords {
    ($($word:literal => $kind:ident),* $(,)?) => {
        /// Every accepted keyword spelling with the kind it produces.
        pub const KEYWORDS: &[(&str, TokenKind)] = &[
            $(($word, TokenKind::$kind),)*
        ];

        /// Looks up `word` in the keyword table.
        ///
        /// # Returns
        /// The keyword kind, or `None` if `word` is an ordinary identifier.
        #[must_use]
        pub fn keyword(word: &str) -> Option<TokenKind> {
            match word {
                $($word => Some(TokenKind::$kind),)*
                _ => None,
            }
        }
    };
}

keywords! {
    "ليكن"          => Let,
    "ثابت"          => Const,
    "إذا"           => If,
    "اذا"           => If,
    "إذن"           => Then,
    "اذن"           => Then,
    "وإلا"          => Else,
    "وانلا"         => Else,
    "والا"          => Else,
    "انتهى"         => End,
    "انتهي"         => End,
    "لكل"           => For,
    "من"            => From,
    "إلى"           => To,
    "الى"           => To,
    "دالة"          => Function,
    "أعد"           => Return,
    "اعد"           => Return,
    "طالما"         => While,
    "توقف"          => Break,
    "استمر"         => Continue,
    "و"             => And,
    "أو"            => Or,
    "او"            => Or,
    "ليس"           => Not,
    "في"            => In,
    "فارغ"          => Null,
    "صحيح"          => True,
    "خطأ"           => False,
    "اكتب"          => Print,
    "أكتب"          => Print,
    "ادخل"          => Input,
    "أدخل"          => Input,
    "نوع"           => Typeof,
    "حجم"           => Sizeof,
    "هيكل"          => Struct,
    "صنف"           => Class,
    "استورد"        => Import,
    "أنشئ"          => Create,
    "انشئ"          => Create,
    "باسم"          => As,
    "حاول"          => Try,
    "امسك"          => Catch,
    "أخيراً"        => Finally,
    "اخيراً"        => Finally,
    "ألقِ"          => Throw,
    "القي"          => Throw,
    "حسب"           => Switch,
    "حالة"          => Case,
    "افتراضي"       => Default,
    "نفذ"           => Do,
    "حتى"           => Until,
    "لكل_عنصر"      => Foreach,
    "أنتج"          => Yield,
    "انتج"          => Yield,
    "غير_متزامن"    => Async,
    "انتظر"         => Await,
    "عام"           => Public,
    "خاص"           => Private,
    "محمي"          => Protected,
    "ثابت_الصنف"    => Static,
    "يرث"           => Extends,
    "ينفذ"          => Implements,
    "جديد"          => New,
    "هذا"           => This,
    "أب"            => Super,
    "اب"            => Super,
    "عقل"           => Mind,
    "منظومة"        => System,
    "تعلّم"         => Learn,
    "تعلم"          => Learn,
    "اسأل"          => Ask,
    "استجب"         => Response,
    "احفظ"          => Save,
    "حمّل"          => Load,
    "حمل"           => Load,
    "درّب"          => Train,
    "درب"           => Train,
    "شبكة_عصبية"    => Neural,
    "طبقات"         => Layers,
    "معدل_تعلم"     => LearningRate,
    "نموذج"         => Model,
    "تنبأ"          => Predict,
    "مجموعة_بيانات" => Dataset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::Lexer;

    #[test]
    fn alternate_spellings_share_a_kind() {
        let pairs = [("إذا", "اذا"),
                     ("إذن", "اذن"),
                     ("وإلا", "وانلا"),
                     ("وإلا", "والا"),
                     ("انتهى", "انتهي"),
                     ("إلى", "الى"),
                     ("أعد", "اعد"),
                     ("أو", "او"),
                     ("اكتب", "أكتب"),
                     ("ادخل", "أدخل")];

        for (first, second) in pairs {
            assert_eq!(keyword(first), keyword(second), "{first} / {second}");
            assert!(keyword(first).is_some());
        }
    }

    #[test]
    fn every_spelling_lexes_to_its_kind() {
        for &(word, kind) in KEYWORDS {
            let tokens = Lexer::new(word).tokenize();
            assert_eq!(tokens[0].kind, kind, "{word}");
            assert_eq!(tokens.len(), 2, "{word}");
        }
    }

    #[test]
    fn ordinary_words_are_not_keywords() {
        assert_eq!(keyword("س"), None);
        assert_eq!(keyword("مجموع"), None);
        assert_eq!(keyword("ليكنس"), None);
    }
}
