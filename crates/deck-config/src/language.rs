//! Snippet language identifiers

use std::fmt;
use std::str::FromStr;

use deck_schema::{EnumSchema, Schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A programming language a code snippet can be written in.
///
/// Names are matched case-sensitively against their lowercase spelling.
/// Anything else is kept verbatim as [`SnippetLanguage::Unknown`] so that
/// configurations naming a language this build does not know about still
/// load.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SnippetLanguage {
    Ada,
    Asp,
    Awk,
    Bash,
    BatchFile,
    C,
    CMake,
    Crontab,
    CSharp,
    Clojure,
    Cpp,
    Css,
    D,
    Diff,
    Docker,
    Dotenv,
    Elixir,
    Elm,
    Erlang,
    File,
    Fish,
    Go,
    GraphQL,
    Haskell,
    Html,
    Java,
    JavaScript,
    Json,
    Julia,
    Kotlin,
    Latex,
    Lua,
    Makefile,
    Markdown,
    Mermaid,
    Nix,
    Nushell,
    OCaml,
    Perl,
    Php,
    Protobuf,
    Puppet,
    Python,
    R,
    Racket,
    Ruby,
    Rust,
    RustScript,
    Scala,
    Shell,
    Sql,
    Swift,
    Svelte,
    Tcl,
    Terraform,
    Toml,
    TypeScript,
    Typst,
    Xml,
    Yaml,
    Verilog,
    Vue,
    Zig,
    Zsh,
    Unknown(String),
}

const LANGUAGES: &[(&str, SnippetLanguage)] = &[
    ("ada", SnippetLanguage::Ada),
    ("asp", SnippetLanguage::Asp),
    ("awk", SnippetLanguage::Awk),
    ("bash", SnippetLanguage::Bash),
    ("batchfile", SnippetLanguage::BatchFile),
    ("c", SnippetLanguage::C),
    ("cmake", SnippetLanguage::CMake),
    ("crontab", SnippetLanguage::Crontab),
    ("csharp", SnippetLanguage::CSharp),
    ("clojure", SnippetLanguage::Clojure),
    ("cpp", SnippetLanguage::Cpp),
    ("css", SnippetLanguage::Css),
    ("d", SnippetLanguage::D),
    ("diff", SnippetLanguage::Diff),
    ("docker", SnippetLanguage::Docker),
    ("dotenv", SnippetLanguage::Dotenv),
    ("elixir", SnippetLanguage::Elixir),
    ("elm", SnippetLanguage::Elm),
    ("erlang", SnippetLanguage::Erlang),
    ("file", SnippetLanguage::File),
    ("fish", SnippetLanguage::Fish),
    ("go", SnippetLanguage::Go),
    ("graphql", SnippetLanguage::GraphQL),
    ("haskell", SnippetLanguage::Haskell),
    ("html", SnippetLanguage::Html),
    ("java", SnippetLanguage::Java),
    ("javascript", SnippetLanguage::JavaScript),
    ("json", SnippetLanguage::Json),
    ("julia", SnippetLanguage::Julia),
    ("kotlin", SnippetLanguage::Kotlin),
    ("latex", SnippetLanguage::Latex),
    ("lua", SnippetLanguage::Lua),
    ("makefile", SnippetLanguage::Makefile),
    ("markdown", SnippetLanguage::Markdown),
    ("mermaid", SnippetLanguage::Mermaid),
    ("nix", SnippetLanguage::Nix),
    ("nushell", SnippetLanguage::Nushell),
    ("ocaml", SnippetLanguage::OCaml),
    ("perl", SnippetLanguage::Perl),
    ("php", SnippetLanguage::Php),
    ("protobuf", SnippetLanguage::Protobuf),
    ("puppet", SnippetLanguage::Puppet),
    ("python", SnippetLanguage::Python),
    ("r", SnippetLanguage::R),
    ("racket", SnippetLanguage::Racket),
    ("ruby", SnippetLanguage::Ruby),
    ("rust", SnippetLanguage::Rust),
    ("rust-script", SnippetLanguage::RustScript),
    ("scala", SnippetLanguage::Scala),
    ("sh", SnippetLanguage::Shell),
    ("sql", SnippetLanguage::Sql),
    ("swift", SnippetLanguage::Swift),
    ("svelte", SnippetLanguage::Svelte),
    ("tcl", SnippetLanguage::Tcl),
    ("terraform", SnippetLanguage::Terraform),
    ("toml", SnippetLanguage::Toml),
    ("typescript", SnippetLanguage::TypeScript),
    ("typst", SnippetLanguage::Typst),
    ("xml", SnippetLanguage::Xml),
    ("yaml", SnippetLanguage::Yaml),
    ("verilog", SnippetLanguage::Verilog),
    ("vue", SnippetLanguage::Vue),
    ("zig", SnippetLanguage::Zig),
    ("zsh", SnippetLanguage::Zsh),
];

impl SnippetLanguage {
    /// Look up a language by name, keeping unrecognized names verbatim.
    pub fn from_name(name: &str) -> Self {
        LANGUAGES
            .iter()
            .find(|(literal, _)| *literal == name)
            .map(|(_, language)| language.clone())
            .unwrap_or_else(|| SnippetLanguage::Unknown(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            SnippetLanguage::Unknown(name) => name,
            known => LANGUAGES
                .iter()
                .find(|(_, language)| language == known)
                .map(|(literal, _)| *literal)
                .unwrap_or_default(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SnippetLanguage::Unknown(_))
    }

    /// Every recognized language name, in declaration order.
    pub fn known_names() -> impl Iterator<Item = &'static str> {
        LANGUAGES.iter().map(|(literal, _)| *literal)
    }

    /// Open enumeration accepting every recognized name and passing any
    /// other string through.
    pub fn schema() -> Schema {
        let schema = Self::known_names().fold(EnumSchema::open("SnippetLanguage"), |schema, name| {
            schema.literal(name, "")
        });
        Schema::Enum(schema)
    }
}

impl fmt::Display for SnippetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnippetLanguage {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl Serialize for SnippetLanguage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SnippetLanguage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}
