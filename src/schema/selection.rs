use serde::{Deserialize, Serialize};
use std::fmt;

/// The grammatical subject of a drill sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "first_s")]
    FirstSingular,
    #[serde(rename = "first_p")]
    FirstPlural,
    #[serde(rename = "second")]
    Second,
    #[serde(rename = "third_s")]
    ThirdSingular,
    #[serde(rename = "third_p")]
    ThirdPlural,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Self::FirstSingular,
        Self::FirstPlural,
        Self::Second,
        Self::ThirdSingular,
        Self::ThirdPlural,
    ];

    /// Nominative pronoun: "I", "we", "you", "she", "they".
    pub fn pronoun(&self) -> &'static str {
        match self {
            Self::FirstSingular => "I",
            Self::FirstPlural => "we",
            Self::Second => "you",
            Self::ThirdSingular => "she",
            Self::ThirdPlural => "they",
        }
    }

    /// Accusative pronoun, used for the indirect object of SVOO sentences.
    pub fn object_pronoun(&self) -> &'static str {
        match self {
            Self::FirstSingular => "me",
            Self::FirstPlural => "us",
            Self::Second => "you",
            Self::ThirdSingular => "her",
            Self::ThirdPlural => "them",
        }
    }

    pub fn gloss(&self) -> &'static str {
        match self {
            Self::FirstSingular => "私",
            Self::FirstPlural => "私たち",
            Self::Second => "あなた",
            Self::ThirdSingular => "彼女",
            Self::ThirdPlural => "彼ら",
        }
    }

    /// Grammatical person (1, 2 or 3).
    pub fn person(&self) -> u8 {
        match self {
            Self::FirstSingular | Self::FirstPlural => 1,
            Self::Second => 2,
            Self::ThirdSingular | Self::ThirdPlural => 3,
        }
    }

    /// True for the only agreement class that takes "-s", "is", "does".
    pub fn is_third_singular(&self) -> bool {
        matches!(self, Self::ThirdSingular)
    }

    /// True when a predicate noun after this subject must be plural.
    /// "you" stays singular here: "You are a teacher."
    pub fn is_plural(&self) -> bool {
        match self {
            Self::FirstPlural | Self::ThirdPlural => true,
            Self::FirstSingular | Self::Second | Self::ThirdSingular => false,
        }
    }

    /// The singular/plural partner of this subject. "you" maps to itself.
    pub fn rotated(&self) -> Subject {
        match self {
            Self::FirstSingular => Self::FirstPlural,
            Self::FirstPlural => Self::FirstSingular,
            Self::Second => Self::Second,
            Self::ThirdSingular => Self::ThirdPlural,
            Self::ThirdPlural => Self::ThirdSingular,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Past,
    Present,
    Future,
}

impl Tense {
    pub const ALL: [Tense; 3] = [Self::Past, Self::Present, Self::Future];

    /// Atomic Japanese marker appended to the gloss.
    pub fn gloss_marker(&self) -> Option<&'static str> {
        match self {
            Self::Past => Some("過去"),
            Self::Present => None,
            Self::Future => Some("未来"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceType {
    Positive,
    Negative,
    Question,
}

impl SentenceType {
    pub const ALL: [SentenceType; 3] = [Self::Positive, Self::Negative, Self::Question];

    pub fn punctuation(&self) -> char {
        match self {
            Self::Positive | Self::Negative => '.',
            Self::Question => '?',
        }
    }

    pub fn gloss_marker(&self) -> Option<&'static str> {
        match self {
            Self::Positive => None,
            Self::Negative => Some("否定"),
            Self::Question => Some("疑問"),
        }
    }
}

/// Conjugation family: a lexical verb with do-support, or the copula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbType {
    Do,
    Be,
}

/// The five canonical English clause structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentencePattern {
    Sv,
    Svo,
    Svc,
    Svoo,
    Svoc,
}

impl SentencePattern {
    pub const ALL: [SentencePattern; 5] = [Self::Sv, Self::Svo, Self::Svc, Self::Svoo, Self::Svoc];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sv => "SV",
            Self::Svo => "SVO",
            Self::Svc => "SVC",
            Self::Svoo => "SVOO",
            Self::Svoc => "SVOC",
        }
    }

    /// Patterns the copula can form. Be-verbs take no object.
    pub fn allows(&self, verb_type: VerbType) -> bool {
        match (verb_type, self) {
            (VerbType::Do, _) => true,
            (VerbType::Be, Self::Sv | Self::Svc) => true,
            (VerbType::Be, Self::Svo | Self::Svoo | Self::Svoc) => false,
        }
    }

    pub fn has_object(&self) -> bool {
        matches!(self, Self::Svo | Self::Svoo | Self::Svoc)
    }

    pub fn has_complement(&self) -> bool {
        matches!(self, Self::Svc | Self::Svoc)
    }

    pub fn parse(input: &str) -> Option<SentencePattern> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(input))
    }
}

impl fmt::Display for SentencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number/article form of a noun slot.
///
/// Nouns in the lexicon are tagged with one of `None`, `A`, `An` or
/// `Plural`; adjectives count as `Adjective` when filtering. The
/// determiner forms (`The`, possessives, `NoArticle`) are never tags,
/// they only select how the chosen noun is introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberForm {
    /// Uncountable: "water", "music", "something".
    None,
    A,
    An,
    Plural,
    The,
    My,
    Our,
    Your,
    His,
    Her,
    Their,
    NoArticle,
    Adjective,
}

impl NumberForm {
    pub const ALL: [NumberForm; 13] = [
        Self::None,
        Self::A,
        Self::An,
        Self::Plural,
        Self::The,
        Self::My,
        Self::Our,
        Self::Your,
        Self::His,
        Self::Her,
        Self::Their,
        Self::NoArticle,
        Self::Adjective,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::A => "a",
            Self::An => "an",
            Self::Plural => "plural",
            Self::The => "the",
            Self::My => "my",
            Self::Our => "our",
            Self::Your => "your",
            Self::His => "his",
            Self::Her => "her",
            Self::Their => "their",
            Self::NoArticle => "no_article",
            Self::Adjective => "adjective",
        }
    }

    pub fn parse(input: &str) -> Option<NumberForm> {
        Self::ALL.into_iter().find(|nf| nf.label() == input)
    }

    /// Determiner forms list every candidate except "something" instead of
    /// filtering by tag. Every new variant must pick a side here.
    pub fn shows_all_except_something(&self) -> bool {
        match self {
            Self::The
            | Self::My
            | Self::Our
            | Self::Your
            | Self::His
            | Self::Her
            | Self::Their
            | Self::NoArticle => true,
            Self::None | Self::A | Self::An | Self::Plural | Self::Adjective => false,
        }
    }

    /// Definite article or possessive determiner written before the noun.
    pub fn determiner(&self) -> Option<&'static str> {
        match self {
            Self::The => Some("the"),
            Self::My => Some("my"),
            Self::Our => Some("our"),
            Self::Your => Some("your"),
            Self::His => Some("his"),
            Self::Her => Some("her"),
            Self::Their => Some("their"),
            Self::None
            | Self::A
            | Self::An
            | Self::Plural
            | Self::NoArticle
            | Self::Adjective => None,
        }
    }

    pub fn determiner_gloss(&self) -> Option<&'static str> {
        match self {
            Self::The => Some("その"),
            Self::My => Some("私の"),
            Self::Our => Some("私たちの"),
            Self::Your => Some("あなたの"),
            Self::His => Some("彼の"),
            Self::Her => Some("彼女の"),
            Self::Their => Some("彼らの"),
            Self::None
            | Self::A
            | Self::An
            | Self::Plural
            | Self::NoArticle
            | Self::Adjective => None,
        }
    }

    /// Singular countable tag: the noun takes "a"/"an" and can be pluralized.
    pub fn is_singular_countable(&self) -> bool {
        matches!(self, Self::A | Self::An)
    }
}

impl fmt::Display for NumberForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The learner's full set of choices for one sentence.
///
/// `verb`, `object` and `complement` are lexicon entry ids (for the SV
/// adverbial slot, `complement` is the phrase itself). Which of them are
/// read depends on `verb_type` and `pattern`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub subject: Subject,
    pub tense: Tense,
    pub sentence_type: SentenceType,
    pub verb_type: VerbType,
    #[serde(default)]
    pub verb: Option<String>,
    pub pattern: SentencePattern,
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub complement: Option<String>,
    /// Indirect object of an SVOO sentence.
    #[serde(default)]
    pub recipient: Option<Subject>,
    #[serde(default = "default_number_form")]
    pub number_form: NumberForm,
}

fn default_number_form() -> NumberForm {
    NumberForm::A
}

impl Selection {
    /// A do-verb selection in the present positive.
    pub fn do_verb(subject: Subject, verb: &str, pattern: SentencePattern) -> Self {
        Self {
            subject,
            tense: Tense::Present,
            sentence_type: SentenceType::Positive,
            verb_type: VerbType::Do,
            verb: Some(verb.to_string()),
            pattern,
            object: None,
            complement: None,
            recipient: None,
            number_form: default_number_form(),
        }
    }

    /// A be-verb selection in the present positive.
    pub fn be_verb(subject: Subject, pattern: SentencePattern) -> Self {
        Self {
            subject,
            tense: Tense::Present,
            sentence_type: SentenceType::Positive,
            verb_type: VerbType::Be,
            verb: None,
            pattern,
            object: None,
            complement: None,
            recipient: None,
            number_form: default_number_form(),
        }
    }

    /// Toggle between the singular and plural form of the same person.
    pub fn rotate_subject(&self) -> Self {
        self.with_subject(self.subject.rotated())
    }

    pub fn with_subject(&self, subject: Subject) -> Self {
        Self {
            subject,
            ..self.clone()
        }
    }

    pub fn with_tense(&self, tense: Tense) -> Self {
        Self {
            tense,
            ..self.clone()
        }
    }

    pub fn with_sentence_type(&self, sentence_type: SentenceType) -> Self {
        Self {
            sentence_type,
            ..self.clone()
        }
    }

    pub fn with_pattern(&self, pattern: SentencePattern) -> Self {
        Self {
            pattern,
            ..self.clone()
        }
    }

    pub fn with_number_form(&self, number_form: NumberForm) -> Self {
        Self {
            number_form,
            ..self.clone()
        }
    }

    pub fn with_object(&self, object: &str) -> Self {
        Self {
            object: Some(object.to_string()),
            ..self.clone()
        }
    }

    pub fn with_complement(&self, complement: &str) -> Self {
        Self {
            complement: Some(complement.to_string()),
            ..self.clone()
        }
    }

    pub fn with_recipient(&self, recipient: Subject) -> Self {
        Self {
            recipient: Some(recipient),
            ..self.clone()
        }
    }
}
