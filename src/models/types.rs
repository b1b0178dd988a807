//! Common domain type definitions
//!
//! Categorical fields of the employee record. Every category carries the label
//! used in the persisted dataset and on charts; labels round-trip through
//! `Display`/`FromStr` and serialize as plain strings.

/// Define a categorical enum with its dataset labels
///
/// Generates `ALL`, `as_str`, `Display`, `FromStr` and string-based serde
/// implementations. Declaration order is the category order used by `Ord`.
macro_rules! category_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every category in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Label written to the dataset and shown on charts
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($label => Ok(Self::$variant),)+
                    other => Err(format!(
                        "unknown {} label '{}'",
                        stringify!($name),
                        other
                    )),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                label.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

category_enum! {
    /// Gender of an employee
    Gender {
        /// Male
        Male => "Masculino",
        /// Female
        Female => "Femenino",
    }
}

category_enum! {
    /// Employment status
    EmploymentStatus {
        /// Currently employed
        Active => "Activo",
        /// No longer employed
        Inactive => "Inactivo",
    }
}

category_enum! {
    /// Job title
    JobTitle {
        Analyst => "Analista",
        Manager => "Gerente",
        Coordinator => "Coordinador",
        Assistant => "Asistente",
        Director => "Director",
    }
}

impl JobTitle {
    /// Managerial roles get the higher salary floor
    #[must_use]
    pub const fn is_managerial(self) -> bool {
        matches!(self, Self::Manager | Self::Director)
    }
}

category_enum! {
    /// Department
    Department {
        HumanResources => "Recursos Humanos",
        Finance => "Finanzas",
        It => "IT",
        Sales => "Ventas",
        Operations => "Operaciones",
    }
}

category_enum! {
    /// Functional area
    FunctionalArea {
        Administrative => "Administrativa",
        Technical => "Técnica",
        Commercial => "Comercial",
    }
}

category_enum! {
    /// Highest completed education, lowest first
    EducationLevel {
        /// High school
        HighSchool => "Bachillerato",
        /// Technical degree
        Technician => "Técnico",
        /// Technologist degree
        Technologist => "Tecnólogo",
        /// University degree
        University => "Universitario",
        /// Postgraduate degree
        Postgraduate => "Postgrado",
    }
}

category_enum! {
    /// Contract type
    ContractType {
        /// Open-ended contract
        Indefinite => "Indefinido",
        /// Fixed-term contract
        FixedTerm => "Fijo",
        /// Service provision contract
        Service => "Prestación de servicios",
        /// Apprenticeship contract
        Apprenticeship => "Aprendizaje",
    }
}

category_enum! {
    /// Health-insurance provider (EPS)
    HealthInsurer {
        Sanitas => "Sanitas",
        Sura => "Sura",
        NuevaEps => "Nueva EPS",
        SaludTotal => "Salud Total",
        Compensar => "Compensar",
    }
}

category_enum! {
    /// Compensation-fund affiliation (caja de compensación)
    CompensationFund {
        Cafam => "Cafam",
        Colsubsidio => "Colsubsidio",
        Compensar => "Compensar",
        Comfama => "Comfama",
        Comfenalco => "Comfenalco",
    }
}

category_enum! {
    /// Pension-fund affiliation
    PensionFund {
        Porvenir => "Porvenir",
        Proteccion => "Protección",
        Colfondos => "Colfondos",
        Skandia => "Skandia",
        /// Public fund, reserved for employees older than 50
        Colpensiones => "Colpensiones",
    }
}

impl PensionFund {
    /// Fund every employee above the age threshold belongs to
    pub const RESERVED: Self = Self::Colpensiones;

    /// Funds open to employees at or below the age threshold
    #[must_use]
    pub fn open_funds() -> Vec<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|fund| *fund != Self::RESERVED)
            .collect()
    }
}
