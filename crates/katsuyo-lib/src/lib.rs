pub mod kana;

pub mod conjugate;
pub use self::conjugate::{Category, ConjugationEntry, ConjugationTable, Form, VerbClass};

pub mod english;
pub use self::english::EnglishConjugator;

pub mod api;
