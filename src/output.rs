use std::{
    borrow::Cow,
    io::Write,
};
use crate::Result;

/// Include path output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Bare directory per line
    Plain,
    /// Compiler flag per line
    Isystem,
}

impl Default for Format {
    fn default() -> Self {
        Format::Plain
    }
}

impl Format {
    pub fn render<'a>(&self, path: &'a str) -> Cow<'a, str> {
        match self {
            Format::Plain => path.into(),
            Format::Isystem => format!("-isystem{}", path).into(),
        }
    }
}

/// Write include paths one per line keeping their order
pub fn write_include_paths(paths: &[String], format: Format, output: &mut impl Write) -> Result<()> {
    for path in paths {
        writeln!(output, "{}", format.render(path))?;
    }
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> Vec<String> {
        vec!["/usr/include/foo".into(), "/usr/include/bar".into()]
    }

    #[test]
    fn plain_lines() {
        let mut out = Vec::new();
        write_include_paths(&paths(), Format::Plain, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/usr/include/foo\n/usr/include/bar\n");
    }

    #[test]
    fn isystem_flags() {
        let mut out = Vec::new();
        write_include_paths(&paths(), Format::Isystem, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(),
                   "-isystem/usr/include/foo\n-isystem/usr/include/bar\n");
    }

    #[test]
    fn nothing_for_empty_list() {
        let mut out = Vec::new();
        write_include_paths(&[], Format::Isystem, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
