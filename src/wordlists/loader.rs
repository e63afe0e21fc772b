//! Word list loading utilities
//!
//! Reads candidate words from raw source files and from the generated
//! wordlist. Reading is lazy: files are opened eagerly so that a missing file
//! is reported up front, but lines are only pulled as the caller iterates.

use crate::core::{Word, normalize};
use crate::error::{Result, SpellError};
use rustc_hash::FxHashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// How a [`WordStream`] treats each line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineFilter {
    /// Drop lines that are not valid words
    Validate,
    /// Trust the file; only trim and lowercase
    Normalize,
}

/// Lazy sequence of words read line by line from a single file
///
/// The file is closed when the stream is dropped.
pub struct WordStream {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    filter: LineFilter,
}

impl WordStream {
    fn open(path: &Path, filter: LineFilter) -> Result<Self> {
        let file = File::open(path).map_err(|e| SpellError::io(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            filter,
        })
    }

    /// Path of the file being read
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for WordStream {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(SpellError::io(&self.path, e))),
            };

            match self.filter {
                LineFilter::Validate => {
                    if let Ok(word) = Word::new(&line) {
                        return Some(Ok(word.into_string()));
                    }
                }
                LineFilter::Normalize => {
                    let word = normalize(&line);
                    if !word.is_empty() {
                        return Some(Ok(word));
                    }
                }
            }
        }
    }
}

/// Load valid words from a single source file
///
/// Each line is trimmed and lowercased; lines containing characters outside
/// the alphabet are skipped silently.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened. Read failures part way
/// through surface as `Err` items of the stream.
///
/// # Examples
/// ```no_run
/// use spellsolver::wordlists::loader::words_from_file;
///
/// for word in words_from_file("resources/sources/english.txt").unwrap() {
///     println!("{}", word.unwrap());
/// }
/// ```
pub fn words_from_file<P: AsRef<Path>>(path: P) -> Result<WordStream> {
    WordStream::open(path.as_ref(), LineFilter::Validate)
}

/// Union of the valid words of every file in a directory
///
/// Duplicates across (and within) files are collapsed. The enumeration order
/// of the returned words is unspecified.
///
/// # Errors
///
/// Returns an I/O error if the directory or any file in it cannot be read.
pub fn words_from_directory<P: AsRef<Path>>(path: P) -> Result<impl Iterator<Item = String>> {
    let path = path.as_ref();
    let mut words: FxHashSet<String> = FxHashSet::default();

    for entry in fs::read_dir(path).map_err(|e| SpellError::io(path, e))? {
        let entry = entry.map_err(|e| SpellError::io(path, e))?;
        let file_path = entry.path();

        if !file_path.is_file() {
            log::warn!("Skipping non-file source entry {}", file_path.display());
            continue;
        }

        let before = words.len();
        for word in words_from_file(&file_path)? {
            words.insert(word?);
        }
        log::debug!(
            "Read {} new words from {}",
            words.len() - before,
            file_path.display()
        );
    }

    Ok(words.into_iter())
}

/// Generate the wordlist file from a directory of source files
///
/// Words are deduplicated, sorted lexicographically and written one per
/// line. Running this twice over the same sources produces identical files.
/// The file is written next to `destination` and renamed into place, so a
/// failed run never leaves a partial wordlist behind.
///
/// Returns the number of words written.
///
/// # Errors
///
/// Returns an I/O error if the sources cannot be read or the destination
/// cannot be written.
pub fn generate<S: AsRef<Path>, D: AsRef<Path>>(source: S, destination: D) -> Result<usize> {
    let destination = destination.as_ref();

    let mut words: Vec<String> = words_from_directory(source)?.collect();
    words.sort_unstable();

    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(|e| SpellError::io(destination, e))?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        for word in &words {
            writeln!(writer, "{word}").map_err(|e| SpellError::io(destination, e))?;
        }
        writer.flush().map_err(|e| SpellError::io(destination, e))?;
    }
    file.persist(destination).map_err(|e| SpellError::io(destination, e.error))?;

    log::info!(
        "Wordlist file generated from sources: {} words in {}",
        words.len(),
        destination.display()
    );
    Ok(words.len())
}

/// Stream the wordlist, generating it from `source` first if it is missing
///
/// Lines of an existing wordlist are only trimmed and lowercased, not
/// validated again.
///
/// # Errors
///
/// Returns an I/O error if generation fails or the wordlist cannot be
/// opened afterwards.
pub fn load<S: AsRef<Path>, D: AsRef<Path>>(source: S, destination: D) -> Result<WordStream> {
    let destination = destination.as_ref();
    if !destination.exists() {
        generate(source, destination)?;
    }
    WordStream::open(destination, LineFilter::Normalize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_source(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn collect(stream: WordStream) -> Vec<String> {
        stream.map(|w| w.unwrap()).collect()
    }

    #[test]
    fn words_from_file_filters_and_normalizes() {
        let dir = TempDir::new().unwrap();
        write_source(dir.path(), "a.txt", "Apple\n  banana \nap ple\nd0g\n\nCHERRY\n");

        let words = collect(words_from_file(dir.path().join("a.txt")).unwrap());
        assert_eq!(words, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn words_from_file_missing_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = words_from_file(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(SpellError::Io { .. })));
    }

    #[test]
    fn words_from_directory_unions_files() {
        let dir = TempDir::new().unwrap();
        write_source(dir.path(), "one.txt", "cat\ndog\n");
        write_source(dir.path(), "two.txt", "Dog\nbird\n");

        let mut words: Vec<String> = words_from_directory(dir.path()).unwrap().collect();
        words.sort();
        assert_eq!(words, vec!["bird", "cat", "dog"]);
    }

    #[test]
    fn words_from_directory_skips_subdirectories() {
        let dir = TempDir::new().unwrap();
        write_source(dir.path(), "one.txt", "cat\n");
        fs::create_dir(dir.path().join("nested")).unwrap();

        let words: Vec<String> = words_from_directory(dir.path()).unwrap().collect();
        assert_eq!(words, vec!["cat"]);
    }

    #[test]
    fn generate_collapses_variants_to_one_line() {
        let sources = TempDir::new().unwrap();
        write_source(sources.path(), "first.txt", "Apple\n");
        write_source(sources.path(), "second.txt", "apple\nap ple\n");

        let out = TempDir::new().unwrap();
        let dest = out.path().join("wordlist.txt");
        let count = generate(sources.path(), &dest).unwrap();

        assert_eq!(count, 1);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "apple\n");
    }

    #[test]
    fn generate_is_sorted_and_idempotent() {
        let sources = TempDir::new().unwrap();
        write_source(sources.path(), "a.txt", "zebra\nmango\n");
        write_source(sources.path(), "b.txt", "apple\nMango\nkiwi\n");

        let out = TempDir::new().unwrap();
        let dest = out.path().join("wordlist.txt");

        generate(sources.path(), &dest).unwrap();
        let first = fs::read(&dest).unwrap();
        generate(sources.path(), &dest).unwrap();
        let second = fs::read(&dest).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            String::from_utf8(first).unwrap(),
            "apple\nkiwi\nmango\nzebra\n"
        );
    }

    #[test]
    fn generate_missing_source_is_io_error() {
        let out = TempDir::new().unwrap();
        let result = generate(out.path().join("nope"), out.path().join("wordlist.txt"));
        assert!(matches!(result, Err(SpellError::Io { .. })));
    }

    #[test]
    fn load_generates_when_absent() {
        let sources = TempDir::new().unwrap();
        write_source(sources.path(), "a.txt", "pear\nfig\n");

        let out = TempDir::new().unwrap();
        let dest = out.path().join("wordlist.txt");
        assert!(!dest.exists());

        let words = collect(load(sources.path(), &dest).unwrap());
        assert!(dest.exists());
        assert_eq!(words, vec!["fig", "pear"]);
    }

    #[test]
    fn load_reads_existing_wordlist_verbatim() {
        let out = TempDir::new().unwrap();
        let dest = out.path().join("wordlist.txt");
        fs::write(&dest, "Plum \nlime\n").unwrap();

        // The source directory is never touched when the wordlist exists
        let words = collect(load(out.path().join("missing-sources"), &dest).unwrap());
        assert_eq!(words, vec!["plum", "lime"]);
    }

    #[test]
    fn load_fails_when_sources_unreadable() {
        let out = TempDir::new().unwrap();
        let result = load(out.path().join("missing"), out.path().join("wordlist.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn generate_into_missing_directory_leaves_nothing() {
        let sources = TempDir::new().unwrap();
        write_source(sources.path(), "a.txt", "kiwi\n");

        let out = TempDir::new().unwrap();
        let dest = out.path().join("absent").join("wordlist.txt");
        assert!(matches!(generate(sources.path(), &dest), Err(SpellError::Io { .. })));
        assert!(!dest.exists());
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn failed_generate_keeps_existing_wordlist() {
        let out = TempDir::new().unwrap();
        let dest = out.path().join("wordlist.txt");
        fs::write(&dest, "plum\n").unwrap();

        assert!(generate(out.path().join("missing"), &dest).is_err());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "plum\n");
    }

    #[test]
    fn generate_leaves_only_the_wordlist() {
        let sources = TempDir::new().unwrap();
        write_source(sources.path(), "a.txt", "kiwi\nlime\n");

        let out = TempDir::new().unwrap();
        let dest = out.path().join("wordlist.txt");
        fs::write(&dest, "stale\n").unwrap();

        assert_eq!(generate(sources.path(), &dest).unwrap(), 2);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "kiwi\nlime\n");

        let entries: Vec<_> = fs::read_dir(out.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("wordlist.txt")]);
    }
}
