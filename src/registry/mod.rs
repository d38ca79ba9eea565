//! Business-entity resolution behind an injectable seam.
//!
//! `MockRegistry` stands in for an authoritative registry lookup: it
//! fabricates every field except the identifier, which always carries the
//! literal classified token. Swapping in a real client only means providing
//! another `EntityRegistry` implementation to the orchestrator.

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::classify::IdentifierKind;
use crate::errors::AppError;
use crate::pkd::PkdCatalog;

#[derive(Debug, Clone, Serialize)]
pub struct BusinessEntity {
    pub name: String,
    pub nip: Option<String>,
    pub regon: Option<String>,
    pub pkd_codes: Vec<String>,
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
    pub established: NaiveDate,
}

#[async_trait]
pub trait EntityRegistry: Send + Sync {
    async fn resolve(&self, kind: IdentifierKind, value: &str)
        -> Result<BusinessEntity, AppError>;
}

pub struct MockRegistry {
    catalog: PkdCatalog,
}

const NAME_HEADS: &[&str] = &[
    "Polmex", "Granitex", "Nowatech", "Silvera", "Baltik", "Krakpol", "Vistula", "Orbis",
];
const NAME_TAILS: &[&str] = &["Sp. z o.o.", "S.A.", "Group", "Industries", "Solutions"];
const STREETS: &[&str] = &["Polna", "Ogrodowa", "Lipowa", "Krótka", "Szkolna", "Leśna"];
const CITIES: &[&str] = &["Warszawa", "Kraków", "Wrocław", "Poznań", "Gdańsk", "Łódź"];

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            catalog: PkdCatalog::new(),
        }
    }
}

impl Default for MockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityRegistry for MockRegistry {
    async fn resolve(
        &self,
        kind: IdentifierKind,
        value: &str,
    ) -> Result<BusinessEntity, AppError> {
        let mut rng = rand::thread_rng();

        let codes = self.catalog.codes();
        let code_count = rng.gen_range(1..=10);
        let pkd_codes = codes
            .choose_multiple(&mut rng, code_count)
            .map(|code| code.to_string())
            .collect();

        let (nip, regon) = match kind {
            IdentifierKind::Nip => (Some(value.to_string()), None),
            IdentifierKind::Regon => (None, Some(value.to_string())),
        };

        let head = NAME_HEADS.choose(&mut rng).copied().unwrap_or("Polmex");
        let tail = NAME_TAILS.choose(&mut rng).copied().unwrap_or("Sp. z o.o.");
        let street = STREETS.choose(&mut rng).copied().unwrap_or("Polna");
        let city = CITIES.choose(&mut rng).copied().unwrap_or("Warszawa");

        let established = NaiveDate::from_ymd_opt(
            rng.gen_range(1990..=2023),
            rng.gen_range(1..=12),
            rng.gen_range(1..=28),
        )
        .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("invalid generated date")))?;

        Ok(BusinessEntity {
            name: format!("{head} {tail}"),
            nip,
            regon,
            pkd_codes,
            street: format!("ul. {street} {}", rng.gen_range(1..=120)),
            city: city.to_string(),
            zip_code: format!("{:02}-{:03}", rng.gen_range(0..=99), rng.gen_range(0..=999)),
            country: "Polska".to_string(),
            established,
        })
    }
}
