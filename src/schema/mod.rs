pub mod lexicon;
pub mod selection;
