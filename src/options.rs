use std::{
    str::FromStr,
    fmt::{Display, Formatter, Result as FmtResult},
};
use crate::Format;

/// FRC toolchain family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toolchain {
    /// 2019 season toolchain
    Y2019,
    /// Pre-2019 toolchain
    Legacy,
}

impl Toolchain {
    /// Default compiler executable of this toolchain
    pub fn compiler_name(&self) -> &'static str {
        match self {
            Toolchain::Y2019 => "arm-frc2019-linux-gnueabi-g++",
            Toolchain::Legacy => "arm-frc-linux-gnueabi-g++",
        }
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Toolchain::Y2019
    }
}

impl FromStr for Toolchain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2019" => Ok(Toolchain::Y2019),
            "legacy" => Ok(Toolchain::Legacy),
            _ => Err(format!("Unknown toolchain `{}` (expected `2019` or `legacy`)", s)),
        }
    }
}

impl Display for Toolchain {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Toolchain::Y2019 => "2019",
            Toolchain::Legacy => "legacy",
        }.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct Options {
    /// Compiler executable to probe
    pub compiler: String,

    /// Output format of include paths
    pub format: Format,
}

impl Options {
    /// Pick the explicit compiler when given, the toolchain default otherwise
    pub fn resolve(compiler: Option<String>, toolchain: Toolchain, format: Format) -> Self {
        Self {
            compiler: compiler.unwrap_or_else(|| toolchain.compiler_name().into()),
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_line;

    #[test]
    fn falls_back_to_toolchain_default() {
        let options = Options::resolve(None, Toolchain::default(), Format::Plain);
        assert_eq!(options.compiler, "arm-frc2019-linux-gnueabi-g++");

        let options = Options::resolve(None, Toolchain::Legacy, Format::Plain);
        assert_eq!(options.compiler, "arm-frc-linux-gnueabi-g++");
    }

    #[test]
    fn override_leads_command_line() {
        let options = Options::resolve(Some("custom-gxx".into()), Toolchain::Legacy, Format::Plain);
        let args = command_line(&options.compiler);

        assert_eq!(args[0], "custom-gxx");
        assert_eq!(&args[1..], &["-E", "-Wp,-v", "-"]);
    }

    #[test]
    fn parses_toolchain_names() {
        assert_eq!("2019".parse::<Toolchain>(), Ok(Toolchain::Y2019));
        assert_eq!("legacy".parse::<Toolchain>(), Ok(Toolchain::Legacy));
        assert!("2020".parse::<Toolchain>().is_err());
        assert_eq!(Toolchain::Legacy.to_string(), "legacy");
    }
}
