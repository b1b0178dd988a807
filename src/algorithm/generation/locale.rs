//! Locale pools for names and cities
//!
//! `es_CO` mirrors a Colombian workforce (given name plus two surnames);
//! `en_US` is a smaller alternative pool.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Deserializer};

/// Region used to synthesize names and cities
///
/// Configuration files accept any spelling `FromStr` does, e.g. `es_CO`,
/// `en-US` or `es`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Spanish, Colombia
    #[default]
    EsCo,
    /// English, United States
    EnUs,
}

impl Locale {
    /// Locale tag, e.g. `es_CO`
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EsCo => "es_CO",
            Self::EnUs => "en_US",
        }
    }

    /// Name and city pools for this locale
    #[must_use]
    pub fn pool(self) -> &'static LocalePool {
        match self {
            Self::EsCo => &ES_CO,
            Self::EnUs => &EN_US,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('-', "_").to_lowercase().as_str() {
            "es_co" | "es" => Ok(Self::EsCo),
            "en_us" | "en" => Ok(Self::EnUs),
            other => Err(format!("unsupported locale '{other}'")),
        }
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

/// Static word lists for one locale
#[derive(Debug)]
pub struct LocalePool {
    pub given_names: &'static [&'static str],
    pub surnames: &'static [&'static str],
    pub cities: &'static [&'static str],
    /// Number of surnames in a full name
    pub surname_count: usize,
}

impl LocalePool {
    /// Draw a full name
    pub fn name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut parts = Vec::with_capacity(1 + self.surname_count);
        parts.push(pick(self.given_names, rng));
        for _ in 0..self.surname_count {
            parts.push(pick(self.surnames, rng));
        }
        parts.join(" ")
    }

    /// Draw a city of residence
    pub fn city<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick(self.cities, rng).to_string()
    }
}

fn pick<R: Rng + ?Sized>(words: &'static [&'static str], rng: &mut R) -> &'static str {
    // Pools are non-empty constants
    words.choose(rng).copied().unwrap_or_default()
}

static ES_CO: LocalePool = LocalePool {
    given_names: &[
        "Alejandro", "Andrés", "Camilo", "Carlos", "Daniel", "David", "Diego", "Felipe",
        "Jorge", "José", "Juan", "Julián", "Luis", "Mateo", "Santiago", "Sebastián",
        "Ana", "Andrea", "Camila", "Carolina", "Catalina", "Daniela", "Diana", "Laura",
        "Luisa", "María", "Natalia", "Paula", "Sara", "Sofía", "Valentina", "Valeria",
    ],
    surnames: &[
        "Rodríguez", "Gómez", "González", "Martínez", "García", "López", "Hernández",
        "Sánchez", "Ramírez", "Pérez", "Díaz", "Muñoz", "Rojas", "Moreno", "Jiménez",
        "Vargas", "Castro", "Ortiz", "Gutiérrez", "Ruiz", "Álvarez", "Torres", "Suárez",
        "Restrepo", "Cardona", "Ospina", "Quintero", "Zapata", "Londoño", "Mejía",
    ],
    cities: &[
        "Bogotá", "Medellín", "Cali", "Barranquilla", "Cartagena", "Cúcuta", "Bucaramanga",
        "Pereira", "Santa Marta", "Ibagué", "Manizales", "Villavicencio", "Pasto",
        "Montería", "Neiva", "Armenia", "Popayán", "Sincelejo", "Valledupar", "Tunja",
    ],
    surname_count: 2,
};

static EN_US: LocalePool = LocalePool {
    given_names: &[
        "James", "John", "Robert", "Michael", "William", "David", "Richard", "Thomas",
        "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Susan", "Jessica", "Sarah",
    ],
    surnames: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Wilson",
        "Anderson", "Taylor", "Thomas", "Moore", "Martin", "Jackson", "White", "Harris",
    ],
    cities: &[
        "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
        "San Antonio", "San Diego", "Dallas", "Austin", "Denver", "Seattle",
    ],
    surname_count: 1,
};
