// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Generator, generate};

use crate::Cli;

#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "The shell generator to use")
                    .value_parser(value_parser!(Shell)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: matches
                .get_one::<Shell>("shell")
                .copied()
                .unwrap_or(Shell::Bash),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        self.generate(&mut io::stdout());
        Ok(())
    }

    pub fn generate(self, buf: &mut impl io::Write) {
        use clap_complete::Shell as ClapShell;

        match self.shell {
            Shell::Bash => write_completion(ClapShell::Bash, buf),
            Shell::Elvish => write_completion(ClapShell::Elvish, buf),
            Shell::Fish => write_completion(ClapShell::Fish, buf),
            Shell::PowerShell => write_completion(ClapShell::PowerShell, buf),
            Shell::Zsh => write_completion(ClapShell::Zsh, buf),
            Shell::Nushell => write_completion(clap_complete_nushell::Nushell {}, buf),
        }
    }
}

fn write_completion(generator: impl Generator, buf: &mut impl io::Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(generator, &mut cmd, name, buf);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(shell: &str) -> CmdGenerateCompletion {
        let matches = Cli::command()
            .try_get_matches_from(["fosdem", "generate-completion", shell])
            .unwrap_or_else(|e| panic!("Failed to parse for shell '{shell}': {e}"));
        let sub_matches = matches.subcommand_matches("generate-completion").unwrap();
        CmdGenerateCompletion::from(sub_matches)
    }

    #[test]
    fn test_generate_mentions_subcommands() {
        let mut output = vec![];
        parse("bash").generate(&mut output);

        let script = String::from_utf8(output).unwrap();
        assert!(script.contains("fosdem"));
        assert!(script.contains("browse"));
        assert!(script.contains("fav"));
    }

    #[test]
    fn test_parse_shell_variants() {
        for (name, shell) in [
            ("bash", Shell::Bash),
            ("elvish", Shell::Elvish),
            ("fish", Shell::Fish),
            ("nushell", Shell::Nushell),
            ("powershell", Shell::PowerShell),
            ("zsh", Shell::Zsh),
        ] {
            assert_eq!(parse(name).shell, shell);
        }
    }

    #[test]
    fn test_rejects_unknown_shell() {
        assert!(
            Cli::command()
                .try_get_matches_from(["fosdem", "generate-completion", "tcsh"])
                .is_err()
        );
    }
}
