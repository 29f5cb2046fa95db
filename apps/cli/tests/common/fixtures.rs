//! Vocabulary fixtures.

pub const SPANISH: &str = "\
hola | hello | greeting
gracias | thank you
perro | dog | noun
not a card line
";

pub const GERMAN: &str = "\
der Hund | the dog | noun, masculine
die Katze | the cat
";

/// Write `content` to `name` inside `dir` and return the path.
pub fn write_file(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}
