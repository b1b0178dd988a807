//! Chart descriptions for each indicator

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::algorithm::indicators::statistics::DescriptiveStats;
use crate::algorithm::indicators::{Indicator, Indicators};
use crate::models::types::{EducationLevel, FunctionalArea, JobTitle};
use crate::render::chart::{Chart, ChartKind, Orientation, Series, format_money};

const MEAN_SALARY: &str = "Salario Promedio ($)";
const HEADCOUNT: &str = "Cantidad de Empleados";

fn bar<K: Display>(entries: impl IntoIterator<Item = (K, f64)>) -> ChartKind {
    let (labels, values) = entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .unzip();
    ChartKind::Bar {
        labels,
        values,
        orientation: Orientation::Vertical,
        value_labels: false,
        annotation: None,
    }
}

fn mean_map<K: Display + Copy>(map: &BTreeMap<K, f64>) -> ChartKind {
    bar(map.iter().map(|(k, v)| (*k, *v)))
}

impl Indicators {
    /// Chart description for one indicator
    #[must_use]
    pub fn chart(&self, indicator: Indicator) -> Chart {
        let slug = indicator.slug();
        match indicator {
            Indicator::TotalEmployees => Chart::new(
                slug,
                "Total de Empleados",
                bar([("Empleados", self.total_employees as f64)]),
            )
            .y_label(HEADCOUNT),

            Indicator::GenderDistribution => {
                let (labels, values) = self
                    .gender_distribution
                    .iter()
                    .map(|(gender, share)| (gender.to_string(), share * 100.0))
                    .unzip();
                Chart::new(slug, "Distribución de Género", ChartKind::Pie { labels, values })
            }

            Indicator::LaborCostByArea => Chart::new(
                slug,
                "Costo Laboral por Área",
                bar(self.labor_cost_by_area.iter().map(|(a, total)| (*a, *total as f64))),
            )
            .x_label("Área")
            .y_label("Salario Total ($)"),

            Indicator::SalaryByGender => Chart::new(
                slug,
                "Distribución Salarial por Género",
                mean_map(&self.salary_by_gender),
            )
            .x_label("Género")
            .y_label(MEAN_SALARY),

            Indicator::SalaryByStatus => {
                Chart::new(slug, "Rotación Salarial", mean_map(&self.salary_by_status))
                    .x_label("Estado")
                    .y_label(MEAN_SALARY)
            }

            Indicator::GrowthIndicator => {
                let recent = self.growth.recent_percentage;
                Chart::new(
                    slug,
                    "Indicador de Crecimiento",
                    ChartKind::Pie {
                        labels: vec![
                            format!(
                                "Ingresos {}-{}",
                                self.growth.window_start, self.growth.window_end
                            ),
                            "Anteriores".to_string(),
                        ],
                        values: vec![recent, 100.0 - recent],
                    },
                )
            }

            Indicator::SalaryByRole => {
                let mut kind = bar(self.salary_by_role.iter().copied());
                if let ChartKind::Bar { orientation, .. } = &mut kind {
                    *orientation = Orientation::Horizontal;
                }
                Chart::new(slug, "Salario Promedio por Cargo", kind)
                    .x_label(MEAN_SALARY)
                    .y_label("Cargo")
            }

            Indicator::SalaryDistributionByArea => {
                let groups = self
                    .salary_stats_by_area
                    .keys()
                    .map(ToString::to_string)
                    .collect();
                let stats = self.salary_stats_by_area.values().collect::<Vec<_>>();
                let column = |name: &str, pick: fn(&DescriptiveStats) -> f64| Series {
                    name: name.to_string(),
                    values: stats.iter().map(|s| pick(s)).collect(),
                };
                let series = vec![
                    column("Mínimo", |s| s.min),
                    column("25%", |s| s.q25),
                    column("Mediana", |s| s.median),
                    column("Media", |s| s.mean),
                    column("75%", |s| s.q75),
                    column("Máximo", |s| s.max),
                ];

                Chart::new(
                    slug,
                    "Distribución de Salario por Área",
                    ChartKind::GroupedBar { groups, series },
                )
                .x_label("Área")
                .y_label("Salario ($)")
            }

            Indicator::InternalEquity => {
                let areas = FunctionalArea::ALL;
                let series = JobTitle::ALL
                    .iter()
                    .map(|role| Series {
                        name: role.to_string(),
                        values: areas
                            .iter()
                            .map(|area| {
                                // No employees in this pair: no bar rather than a zero mean
                                self.salary_by_area_role
                                    .get(&(*area, *role))
                                    .copied()
                                    .unwrap_or(f64::NAN)
                            })
                            .collect(),
                    })
                    .collect();

                Chart::new(
                    slug,
                    "Equidad Interna por Área y Cargo",
                    ChartKind::GroupedBar {
                        groups: areas.iter().map(ToString::to_string).collect(),
                        series,
                    },
                )
                .x_label("Área")
                .y_label(MEAN_SALARY)
            }

            Indicator::GenderPayGap => {
                let mut kind = mean_map(&self.gender_gap.means);
                if let ChartKind::Bar {
                    value_labels,
                    annotation,
                    ..
                } = &mut kind
                {
                    *value_labels = true;
                    *annotation = Some(format!("Diferencia: {}", format_money(self.gender_gap.gap)));
                }
                Chart::new(slug, "Brecha Salarial entre Géneros", kind)
                    .x_label("Género")
                    .y_label(MEAN_SALARY)
            }

            Indicator::EducationByGender => {
                let series = EducationLevel::ALL
                    .iter()
                    .map(|level| Series {
                        name: level.to_string(),
                        values: self
                            .education_by_gender
                            .values()
                            .map(|counts| counts.get(level).copied().unwrap_or(0) as f64)
                            .collect(),
                    })
                    .collect();

                Chart::new(
                    slug,
                    "Nivel Educativo por Género",
                    ChartKind::GroupedBar {
                        groups: self
                            .education_by_gender
                            .keys()
                            .map(ToString::to_string)
                            .collect(),
                        series,
                    },
                )
                .x_label("Género")
                .y_label(HEADCOUNT)
            }

            Indicator::AgeSalaryRelation => Chart::new(
                slug,
                "Relación entre Edad y Salario",
                ChartKind::Scatter {
                    points: self
                        .salary_by_age
                        .iter()
                        .map(|(age, mean)| (f64::from(*age), *mean))
                        .collect(),
                },
            )
            .x_label("Edad")
            .y_label(MEAN_SALARY),

            Indicator::ExperienceByContract => Chart::new(
                slug,
                "Años de Experiencia por Tipo de Contrato",
                mean_map(&self.experience_by_contract),
            )
            .x_label("Tipo de Contrato")
            .y_label("Experiencia Promedio (años)"),

            Indicator::EmployeesByPensionFund => Chart::new(
                slug,
                "Distribución de Empleados por Fondo de Pensiones",
                bar(self
                    .employees_by_pension_fund
                    .iter()
                    .map(|(fund, count)| (*fund, *count as f64))),
            )
            .x_label("Fondo de Pensión")
            .y_label(HEADCOUNT),
        }
    }

    /// Charts for every indicator, in reporting order
    #[must_use]
    pub fn charts(&self) -> Vec<Chart> {
        Indicator::ALL.iter().map(|i| self.chart(*i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::fixtures::employee;
    use crate::models::types::Gender;

    fn indicators() -> Indicators {
        let employees = vec![
            employee(10_000_001, Gender::Female, 2_000_000),
            employee(10_000_002, Gender::Male, 4_000_000),
        ];
        Indicators::compute(&employees, 5).unwrap()
    }

    #[test]
    fn test_one_chart_per_indicator() {
        let charts = indicators().charts();
        assert_eq!(charts.len(), Indicator::ALL.len());
        for (chart, indicator) in charts.iter().zip(Indicator::ALL) {
            assert_eq!(chart.slug, indicator.slug());
            assert!(!chart.title.is_empty());
        }
    }

    #[test]
    fn test_gap_chart_is_annotated() {
        let chart = indicators().chart(Indicator::GenderPayGap);
        match chart.kind {
            ChartKind::Bar {
                annotation,
                value_labels,
                values,
                ..
            } => {
                assert_eq!(annotation.as_deref(), Some("Diferencia: $2,000,000"));
                assert!(value_labels);
                assert_eq!(values, vec![4_000_000.0, 2_000_000.0]);
            }
            other => panic!("unexpected chart kind {other:?}"),
        }
    }

    #[test]
    fn test_pension_chart_counts_employees() {
        let chart = indicators().chart(Indicator::EmployeesByPensionFund);
        assert_eq!(chart.y_label, HEADCOUNT);
    }

    #[test]
    fn test_equity_leaves_empty_pairs_unplotted() {
        let chart = indicators().chart(Indicator::InternalEquity);
        let ChartKind::GroupedBar { groups, series } = chart.kind else {
            panic!("equity chart should be grouped bars");
        };
        assert_eq!(groups, vec!["Administrativa", "Técnica", "Comercial"]);

        let analyst = series.iter().find(|s| s.name == "Analista").unwrap();
        assert!(analyst.values[0].is_nan());
        assert_eq!(analyst.values[1], 3_000_000.0);
        assert!(analyst.values[2].is_nan());

        let director = series.iter().find(|s| s.name == "Director").unwrap();
        assert!(director.values.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_growth_pie_sums_to_hundred() {
        let chart = indicators().chart(Indicator::GrowthIndicator);
        let ChartKind::Pie { values, .. } = chart.kind else {
            panic!("growth chart should be a pie");
        };
        assert!((values.iter().sum::<f64>() - 100.0).abs() < 1e-9);
    }
}
