// Copyright (c) 2024  Prepay Power energy team

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/*!
Resultados del balance
======================

Balance diario (`DailyBalance`), previsión mensual (`MonthlyForecastEntry`) y totales anuales
(`ForecastTotals`). Energías en kWh y emisiones en kg_CO2.
*/

use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

fn round_serialize_3<S>(x: &f64, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_f64((x * 1000.0).round() / 1000.0)
}

/// Alcance de las emisiones de CO2
///
/// The source dashboards disagree on whether CHP gas counts towards total CO2, so it is a choice.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
pub enum Co2Scope {
    /// Gas de caldera y de cogeneración
    #[strum(serialize = "boiler+chp")]
    BoilerAndChp,
    /// Solo gas de caldera
    #[strum(serialize = "boiler")]
    BoilerOnly,
}

impl Default for Co2Scope {
    fn default() -> Self {
        Co2Scope::BoilerAndChp
    }
}

/// Balance energético diario [kWh/día], emisiones [kg_CO2/día]
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyBalance {
    /// Demanda de calor, incluidas las pérdidas del sistema
    #[serde(serialize_with = "round_serialize_3")]
    pub heat_demand: f64,
    /// Calor aportado por la cogeneración
    #[serde(serialize_with = "round_serialize_3")]
    pub chp_thermal: f64,
    /// Gas consumido por la cogeneración
    #[serde(serialize_with = "round_serialize_3")]
    pub chp_gas_consumed: f64,
    /// Calor aportado por la bomba de calor
    #[serde(serialize_with = "round_serialize_3")]
    pub hp_thermal: f64,
    /// Electricidad consumida por la bomba de calor
    #[serde(serialize_with = "round_serialize_3")]
    pub hp_electric_consumed: f64,
    /// Calor residual cubierto por la caldera
    #[serde(serialize_with = "round_serialize_3")]
    pub boiler_thermal: f64,
    /// Gas consumido por la caldera
    #[serde(serialize_with = "round_serialize_3")]
    pub boiler_gas_input: f64,
    /// Emisiones totales de CO2
    #[serde(serialize_with = "round_serialize_3")]
    pub total_co2: f64,
}

/// Mes del año
#[allow(missing_docs)]
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

/// Previsión mensual [kWh/mes]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyForecastEntry {
    /// Mes
    pub month: Month,
    /// Demanda de calefacción
    #[serde(serialize_with = "round_serialize_3")]
    pub heating: f64,
    /// Aporte de la cogeneración
    #[serde(serialize_with = "round_serialize_3")]
    pub chp: f64,
    /// Aporte de la bomba de calor
    #[serde(serialize_with = "round_serialize_3")]
    pub hp: f64,
    /// Calor cubierto por la caldera
    #[serde(serialize_with = "round_serialize_3")]
    pub boiler: f64,
}

/// Totales anuales de la previsión mensual [kWh/año]
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastTotals {
    /// Demanda de calefacción
    #[serde(serialize_with = "round_serialize_3")]
    pub heating: f64,
    /// Aporte de la cogeneración
    #[serde(serialize_with = "round_serialize_3")]
    pub chp: f64,
    /// Aporte de la bomba de calor
    #[serde(serialize_with = "round_serialize_3")]
    pub hp: f64,
    /// Calor cubierto por la caldera
    #[serde(serialize_with = "round_serialize_3")]
    pub boiler: f64,
}
