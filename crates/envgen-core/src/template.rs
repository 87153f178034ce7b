//! Template header and known template types

use serde::{Deserialize, Serialize};

/// Fallback description for target names outside [`ENV_TYPES`]
pub const CUSTOM_DESCRIPTION: &str = "Configurações personalizadas";

pub const AUTO_GENERATED_NOTICE: &str = "Gerado automaticamente a partir do arquivo .env";

/// Lines added in front of the source content (five comments and a blank)
pub const HEADER_LINE_COUNT: usize = 6;

/// A known template file type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnvType {
    pub name: &'static str,
    /// Written into the generated header
    pub description: &'static str,
    /// Shown when listing types to pick from
    pub menu_description: &'static str,
}

pub const ENV_TYPES: &[EnvType] = &[
    EnvType {
        name: ".env.example",
        description: "Arquivo template padrão",
        menu_description: "Arquivo template padrão",
    },
    EnvType {
        name: ".env.development",
        description: "Configurações para ambiente de desenvolvimento",
        menu_description: "Ambiente de desenvolvimento",
    },
    EnvType {
        name: ".env.staging",
        description: "Configurações para ambiente de homologação/teste",
        menu_description: "Ambiente de homologação/teste",
    },
    EnvType {
        name: ".env.production",
        description: "Configurações para ambiente de produção",
        menu_description: "Ambiente de produção",
    },
    EnvType {
        name: ".env.test",
        description: "Configurações para testes automatizados",
        menu_description: "Ambiente de testes automatizados",
    },
    EnvType {
        name: ".env.local",
        description: "Configurações locais (não commitado)",
        menu_description: "Configurações locais (não commitado)",
    },
    EnvType {
        name: ".env.docker",
        description: "Configurações para containers Docker",
        menu_description: "Para containers Docker",
    },
    EnvType {
        name: ".env.preview",
        description: "Configurações para deploys de preview",
        menu_description: "Para deploys de preview",
    },
];

/// Header description for a target name (exact match, else the custom fallback)
pub fn describe(file_name: &str) -> &'static str {
    ENV_TYPES
        .iter()
        .find(|t| t.name == file_name)
        .map(|t| t.description)
        .unwrap_or(CUSTOM_DESCRIPTION)
}

pub fn is_known_type(file_name: &str) -> bool {
    ENV_TYPES.iter().any(|t| t.name == file_name)
}

/// Metadata prepended to every generated template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateHeader {
    pub target_file_name: String,
    pub type_description: String,
    pub author: String,
    pub date: String,
}

impl TemplateHeader {
    pub fn new(
        target_file_name: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        let target_file_name = target_file_name.into();
        Self {
            type_description: describe(&target_file_name).to_string(),
            target_file_name,
            author: author.into(),
            date: date.into(),
        }
    }

    /// The header lines, in output order. The last one is blank.
    pub fn lines(&self) -> [String; HEADER_LINE_COUNT] {
        [
            format!("# {}", self.target_file_name),
            format!("# {}", self.type_description),
            format!("# {}", AUTO_GENERATED_NOTICE),
            format!("# Autor: {}", self.author),
            format!("# Data: {}", self.date),
            String::new(),
        ]
    }
}
