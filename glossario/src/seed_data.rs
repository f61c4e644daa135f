//! Built-in seed dictionary.
//!
//! A handful of everyday terms shipped with the binary so the glossary
//! answers something even with no store and no generation key. Keyed by
//! the lower-cased, trimmed raw text — not the slug — so a term only
//! hits this tier when it matches the literal key.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::{Category, PracticalUsage, TermEntry, TermRecord};

pub static SEED_TERMS: Lazy<HashMap<&'static str, TermRecord>> = Lazy::new(|| {
    let mut terms = HashMap::new();

    terms.insert(
        "api",
        TermRecord {
            id: "api".to_string(),
            term: "API".to_string(),
            full_term: "Application Programming Interface".to_string(),
            category: Category::Backend,
            definition: "Um conjunto de regras que permite que dois sistemas conversem entre si. \
                         É como um contrato: quem pede segue um formato, quem responde também."
                .to_string(),
            phonetic: "a-pê-í".to_string(),
            translation: "Interface de Programação de Aplicações".to_string(),
            slang: None,
            examples: vec![TermEntry {
                title: "Integração de pagamento".to_string(),
                description: "O e-commerce chama a API do banco para cobrar o cartão do cliente."
                    .to_string(),
            }],
            analogies: vec![TermEntry {
                title: "Garçom de restaurante".to_string(),
                description: "Você faz o pedido ao garçom (API), ele leva para a cozinha \
                              (sistema) e volta com o prato pronto (resposta)."
                    .to_string(),
            }],
            practical_usage: PracticalUsage {
                title: "Integrações".to_string(),
                content: "Aparece sempre que dois sistemas precisam trocar dados, de login \
                          social a consulta de frete."
                    .to_string(),
            },
            related_terms: vec![
                "endpoint".to_string(),
                "rest".to_string(),
                "backend".to_string(),
            ],
        },
    );

    terms.insert(
        "deploy",
        TermRecord {
            id: "deploy".to_string(),
            term: "Deploy".to_string(),
            full_term: "Deployment".to_string(),
            category: Category::Devops,
            definition: "O ato de publicar uma nova versão do sistema para os usuários. \
                         É o momento em que o código sai da máquina do time e entra no ar."
                .to_string(),
            phonetic: "di-plói".to_string(),
            translation: "implantação".to_string(),
            slang: Some("\"subir pra produção\"".to_string()),
            examples: vec![TermEntry {
                title: "Sexta-feira sem deploy".to_string(),
                description: "Muitos times evitam publicar versões na sexta para não passar \
                              o fim de semana corrigindo problemas."
                    .to_string(),
            }],
            analogies: vec![TermEntry {
                title: "Inauguração de loja".to_string(),
                description: "Depois de meses de reforma (desenvolvimento), o deploy é abrir \
                              as portas para os clientes."
                    .to_string(),
            }],
            practical_usage: PracticalUsage {
                title: "Rotina do time".to_string(),
                content: "Usado diariamente em frases como \"o deploy quebrou\" ou \"faz o \
                          deploy depois do almoço\"."
                    .to_string(),
            },
            related_terms: vec![
                "ci-cd".to_string(),
                "produção".to_string(),
                "rollback".to_string(),
            ],
        },
    );

    terms.insert(
        "bug",
        TermRecord {
            id: "bug".to_string(),
            term: "Bug".to_string(),
            full_term: "Bug".to_string(),
            category: Category::Geral,
            definition: "Um defeito no software: o sistema faz algo diferente do esperado. \
                         Pode ser visual, de cálculo ou até travar tudo."
                .to_string(),
            phonetic: "bâg".to_string(),
            translation: "inseto (historicamente, uma mariposa travou um computador)".to_string(),
            slang: Some("\"bugou\"".to_string()),
            examples: vec![TermEntry {
                title: "Carrinho zerado".to_string(),
                description: "O cliente adiciona produtos e o total aparece como zero: um bug \
                              de cálculo."
                    .to_string(),
            }],
            analogies: vec![TermEntry {
                title: "Receita com erro".to_string(),
                description: "Seguir uma receita com a quantidade errada de fermento: o bolo \
                              (sistema) não sai como planejado."
                    .to_string(),
            }],
            practical_usage: PracticalUsage::default(),
            related_terms: vec![
                "debug".to_string(),
                "teste".to_string(),
                "hotfix".to_string(),
            ],
        },
    );

    terms
});

/// Seed-tier lookup. The key form is intentionally the raw lower-cased,
/// trimmed text rather than the slug.
pub fn seed_lookup(raw: &str) -> Option<TermRecord> {
    SEED_TERMS.get(raw.trim().to_lowercase().as_str()).cloned()
}
