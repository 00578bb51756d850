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
Parámetros de entrada
=====================

- `InputParameters`: conjunto completo de datos del emplazamiento que usa el cálculo
- `ParameterSet`: conjunto parcial (perfiles, archivos de parámetros, opciones de la CLI)

Los conjuntos parciales se combinan por prioridad y se completan con valores por defecto
(`ParameterSet::resolve`).

Formato de texto de un `ParameterSet`:

```text
# Barnwell, invierno
area: 22102
u_value: 0.15
chp_installed: yes
chp_hours_per_day: 15
```
*/

use std::fmt;
use std::str;

use serde_derive::{Deserialize, Serialize};

use crate::error::{BalanceError, Result};

/// Horas máximas de funcionamiento diario de un equipo
pub const MAX_HOURS_PER_DAY: u32 = 24;

/// Datos completos del emplazamiento para el cálculo del balance
///
/// Fully resolved site inputs. Fractions are [0, 1] ratios, not percentages.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputParameters {
    /// Superficie de la envolvente [m2]
    pub area: f64,
    /// Transmitancia térmica de la envolvente [W/m2K]
    pub u_value: f64,
    /// Temperatura interior [ºC]
    pub indoor_temp: f64,
    /// Temperatura exterior [ºC]
    pub outdoor_temp: f64,
    /// Pérdidas del sistema, fracción de la demanda [0, 1]
    pub system_loss: f64,
    /// Rendimiento de la caldera (0, 1]
    pub boiler_eff: f64,
    /// Factor de emisión del gas [kg_CO2/kWh]
    pub co2_factor: f64,
    /// Precio de la electricidad [€/kWh]
    pub elec_price: f64,
    /// Cogeneración instalada
    pub chp_installed: bool,
    /// Potencia térmica nominal de la cogeneración [kW]
    pub chp_thermal_output: f64,
    /// Potencia eléctrica nominal de la cogeneración [kW]
    pub chp_elec_output: f64,
    /// Consumo de gas nominal de la cogeneración [kW]
    pub chp_gas_input: f64,
    /// Horas diarias de funcionamiento de la cogeneración [0, 24]
    pub chp_hours_per_day: u32,
    /// Factor de ajuste de la cogeneración respecto a la potencia nominal [0, 1]
    pub chp_adjustment: f64,
    /// Bomba de calor instalada
    pub hp_installed: bool,
    /// Potencia térmica nominal de la bomba de calor [kW]
    pub hp_thermal_output: f64,
    /// Horas diarias de funcionamiento de la bomba de calor [0, 24]
    pub hp_hours_per_day: u32,
    /// Coeficiente de rendimiento (COP) de la bomba de calor
    pub hp_cop: f64,
}

impl Default for InputParameters {
    fn default() -> Self {
        ParameterSet::default().resolve()
    }
}

fn check_range(
    key: &'static str,
    value: f64,
    min: f64,
    max: f64,
    range: &'static str,
) -> Result<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(BalanceError::OutOfRange { key, value, range })
    }
}

impl InputParameters {
    /// Comprueba que los parámetros están en rangos físicamente razonables
    ///
    /// The calculator accepts any input; this check belongs to the presentation layer.
    pub fn validate(&self) -> Result<()> {
        let inf = std::f64::INFINITY;
        check_range("area", self.area, 0.0, inf, "[0, ∞)")?;
        check_range("u_value", self.u_value, 0.0, inf, "[0, ∞)")?;
        check_range("indoor_temp", self.indoor_temp, -inf, inf, "(-∞, ∞)")?;
        check_range("outdoor_temp", self.outdoor_temp, -inf, inf, "(-∞, ∞)")?;
        check_range("system_loss", self.system_loss, 0.0, 1.0, "[0, 1]")?;
        if !(self.boiler_eff > 0.0 && self.boiler_eff <= 1.0) {
            return Err(BalanceError::OutOfRange {
                key: "boiler_eff",
                value: self.boiler_eff,
                range: "(0, 1]",
            });
        }
        check_range("co2_factor", self.co2_factor, 0.0, inf, "[0, ∞)")?;
        check_range("elec_price", self.elec_price, 0.0, inf, "[0, ∞)")?;
        check_range("chp_thermal_output", self.chp_thermal_output, 0.0, inf, "[0, ∞)")?;
        check_range("chp_elec_output", self.chp_elec_output, 0.0, inf, "[0, ∞)")?;
        check_range("chp_gas_input", self.chp_gas_input, 0.0, inf, "[0, ∞)")?;
        check_range(
            "chp_hours_per_day",
            f64::from(self.chp_hours_per_day),
            0.0,
            f64::from(MAX_HOURS_PER_DAY),
            "[0, 24]",
        )?;
        check_range("chp_adjustment", self.chp_adjustment, 0.0, 1.0, "[0, 1]")?;
        check_range("hp_thermal_output", self.hp_thermal_output, 0.0, inf, "[0, ∞)")?;
        check_range(
            "hp_hours_per_day",
            f64::from(self.hp_hours_per_day),
            0.0,
            f64::from(MAX_HOURS_PER_DAY),
            "[0, 24]",
        )?;
        // COP nulo o negativo: el cálculo anula el consumo eléctrico
        check_range("hp_cop", self.hp_cop, -inf, inf, "(-∞, ∞)")?;
        Ok(())
    }
}

/// Conjunto parcial de parámetros de entrada
///
/// Partial set of inputs, as found in site profiles, parameter files and command line overrides.
/// Absent fields (`None`) fall back to lower priority sets or to the defaults of `resolve`.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub area: Option<f64>,
    pub u_value: Option<f64>,
    pub indoor_temp: Option<f64>,
    pub outdoor_temp: Option<f64>,
    pub system_loss: Option<f64>,
    pub boiler_eff: Option<f64>,
    pub co2_factor: Option<f64>,
    pub elec_price: Option<f64>,
    pub chp_installed: Option<bool>,
    pub chp_thermal_output: Option<f64>,
    pub chp_elec_output: Option<f64>,
    pub chp_gas_input: Option<f64>,
    pub chp_hours_per_day: Option<u32>,
    pub chp_adjustment: Option<f64>,
    pub hp_installed: Option<bool>,
    pub hp_thermal_output: Option<f64>,
    pub hp_hours_per_day: Option<u32>,
    pub hp_cop: Option<f64>,
}

impl ParameterSet {
    /// Conjunto vacío
    pub const EMPTY: ParameterSet = ParameterSet {
        area: None,
        u_value: None,
        indoor_temp: None,
        outdoor_temp: None,
        system_loss: None,
        boiler_eff: None,
        co2_factor: None,
        elec_price: None,
        chp_installed: None,
        chp_thermal_output: None,
        chp_elec_output: None,
        chp_gas_input: None,
        chp_hours_per_day: None,
        chp_adjustment: None,
        hp_installed: None,
        hp_thermal_output: None,
        hp_hours_per_day: None,
        hp_cop: None,
    };

    /// Comprueba si no hay ningún parámetro definido
    pub fn is_empty(&self) -> bool {
        *self == ParameterSet::EMPTY
    }

    /// Combina con otro conjunto, que tiene prioridad para los valores que define
    pub fn merge(&self, overrides: &ParameterSet) -> ParameterSet {
        ParameterSet {
            area: overrides.area.or(self.area),
            u_value: overrides.u_value.or(self.u_value),
            indoor_temp: overrides.indoor_temp.or(self.indoor_temp),
            outdoor_temp: overrides.outdoor_temp.or(self.outdoor_temp),
            system_loss: overrides.system_loss.or(self.system_loss),
            boiler_eff: overrides.boiler_eff.or(self.boiler_eff),
            co2_factor: overrides.co2_factor.or(self.co2_factor),
            elec_price: overrides.elec_price.or(self.elec_price),
            chp_installed: overrides.chp_installed.or(self.chp_installed),
            chp_thermal_output: overrides.chp_thermal_output.or(self.chp_thermal_output),
            chp_elec_output: overrides.chp_elec_output.or(self.chp_elec_output),
            chp_gas_input: overrides.chp_gas_input.or(self.chp_gas_input),
            chp_hours_per_day: overrides.chp_hours_per_day.or(self.chp_hours_per_day),
            chp_adjustment: overrides.chp_adjustment.or(self.chp_adjustment),
            hp_installed: overrides.hp_installed.or(self.hp_installed),
            hp_thermal_output: overrides.hp_thermal_output.or(self.hp_thermal_output),
            hp_hours_per_day: overrides.hp_hours_per_day.or(self.hp_hours_per_day),
            hp_cop: overrides.hp_cop.or(self.hp_cop),
        }
    }

    /// Completa los parámetros no definidos con sus valores por defecto
    ///
    /// Equipment is considered not installed unless stated otherwise.
    pub fn resolve(&self) -> InputParameters {
        InputParameters {
            area: self.area.unwrap_or(0.0),
            u_value: self.u_value.unwrap_or(0.15),
            indoor_temp: self.indoor_temp.unwrap_or(20.0),
            outdoor_temp: self.outdoor_temp.unwrap_or(5.0),
            system_loss: self.system_loss.unwrap_or(0.5),
            boiler_eff: self.boiler_eff.unwrap_or(0.85),
            co2_factor: self.co2_factor.unwrap_or(0.23),
            elec_price: self.elec_price.unwrap_or(0.25),
            chp_installed: self.chp_installed.unwrap_or(false),
            chp_thermal_output: self.chp_thermal_output.unwrap_or(0.0),
            chp_elec_output: self.chp_elec_output.unwrap_or(0.0),
            chp_gas_input: self.chp_gas_input.unwrap_or(0.0),
            chp_hours_per_day: self.chp_hours_per_day.unwrap_or(0),
            chp_adjustment: self.chp_adjustment.unwrap_or(0.95),
            hp_installed: self.hp_installed.unwrap_or(false),
            hp_thermal_output: self.hp_thermal_output.unwrap_or(0.0),
            hp_hours_per_day: self.hp_hours_per_day.unwrap_or(0),
            hp_cop: self.hp_cop.unwrap_or(0.0),
        }
    }

    /// Asigna el valor de un parámetro a partir de su clave y su representación textual
    ///
    /// Las claves son los nombres de campo de `InputParameters` o sus abreviaturas
    /// (`chp_th`, `chp_el`, `chp_gas`, `chp_hours`, `chp_adj`, `hp_th`, `hp_hours`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key.trim() {
            "area" => self.area = Some(parse_f64(key, value)?),
            "u_value" => self.u_value = Some(parse_f64(key, value)?),
            "indoor_temp" => self.indoor_temp = Some(parse_f64(key, value)?),
            "outdoor_temp" => self.outdoor_temp = Some(parse_f64(key, value)?),
            "system_loss" => self.system_loss = Some(parse_f64(key, value)?),
            "boiler_eff" => self.boiler_eff = Some(parse_f64(key, value)?),
            "co2_factor" => self.co2_factor = Some(parse_f64(key, value)?),
            "elec_price" => self.elec_price = Some(parse_f64(key, value)?),
            "chp_installed" => self.chp_installed = Some(parse_bool(key, value)?),
            "chp_thermal_output" | "chp_th" => {
                self.chp_thermal_output = Some(parse_f64(key, value)?)
            }
            "chp_elec_output" | "chp_el" => self.chp_elec_output = Some(parse_f64(key, value)?),
            "chp_gas_input" | "chp_gas" => self.chp_gas_input = Some(parse_f64(key, value)?),
            "chp_hours_per_day" | "chp_hours" => {
                self.chp_hours_per_day = Some(parse_hours(key, value)?)
            }
            "chp_adjustment" | "chp_adj" => self.chp_adjustment = Some(parse_f64(key, value)?),
            "hp_installed" => self.hp_installed = Some(parse_bool(key, value)?),
            "hp_thermal_output" | "hp_th" => {
                self.hp_thermal_output = Some(parse_f64(key, value)?)
            }
            "hp_hours_per_day" | "hp_hours" => {
                self.hp_hours_per_day = Some(parse_hours(key, value)?)
            }
            "hp_cop" => self.hp_cop = Some(parse_f64(key, value)?),
            other => return Err(BalanceError::UnknownKey(other.to_string())),
        };
        Ok(())
    }

    /// Pares (clave, valor) de los parámetros definidos, en el orden de `InputParameters`
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        fn push<T: fmt::Display>(
            v: &mut Vec<(&'static str, String)>,
            key: &'static str,
            val: Option<T>,
        ) {
            if let Some(val) = val {
                v.push((key, val.to_string()));
            }
        }
        let yes_no = |b: Option<bool>| b.map(|b| if b { "yes" } else { "no" });
        let mut v = Vec::new();
        push(&mut v, "area", self.area);
        push(&mut v, "u_value", self.u_value);
        push(&mut v, "indoor_temp", self.indoor_temp);
        push(&mut v, "outdoor_temp", self.outdoor_temp);
        push(&mut v, "system_loss", self.system_loss);
        push(&mut v, "boiler_eff", self.boiler_eff);
        push(&mut v, "co2_factor", self.co2_factor);
        push(&mut v, "elec_price", self.elec_price);
        push(&mut v, "chp_installed", yes_no(self.chp_installed));
        push(&mut v, "chp_thermal_output", self.chp_thermal_output);
        push(&mut v, "chp_elec_output", self.chp_elec_output);
        push(&mut v, "chp_gas_input", self.chp_gas_input);
        push(&mut v, "chp_hours_per_day", self.chp_hours_per_day);
        push(&mut v, "chp_adjustment", self.chp_adjustment);
        push(&mut v, "hp_installed", yes_no(self.hp_installed));
        push(&mut v, "hp_thermal_output", self.hp_thermal_output);
        push(&mut v, "hp_hours_per_day", self.hp_hours_per_day);
        push(&mut v, "hp_cop", self.hp_cop);
        v
    }
}

impl From<InputParameters> for ParameterSet {
    fn from(p: InputParameters) -> Self {
        ParameterSet {
            area: Some(p.area),
            u_value: Some(p.u_value),
            indoor_temp: Some(p.indoor_temp),
            outdoor_temp: Some(p.outdoor_temp),
            system_loss: Some(p.system_loss),
            boiler_eff: Some(p.boiler_eff),
            co2_factor: Some(p.co2_factor),
            elec_price: Some(p.elec_price),
            chp_installed: Some(p.chp_installed),
            chp_thermal_output: Some(p.chp_thermal_output),
            chp_elec_output: Some(p.chp_elec_output),
            chp_gas_input: Some(p.chp_gas_input),
            chp_hours_per_day: Some(p.chp_hours_per_day),
            chp_adjustment: Some(p.chp_adjustment),
            hp_installed: Some(p.hp_installed),
            hp_thermal_output: Some(p.hp_thermal_output),
            hp_hours_per_day: Some(p.hp_hours_per_day),
            hp_cop: Some(p.hp_cop),
        }
    }
}

fn parse_f64(key: &str, value: &str) -> Result<f64> {
    value.parse::<f64>().map_err(|_| BalanceError::WrongValue {
        key: key.to_string(),
        value: value.to_string(),
        desc: "número",
    })
}

fn parse_hours(key: &str, value: &str) -> Result<u32> {
    value.parse::<u32>().map_err(|_| BalanceError::WrongValue {
        key: key.to_string(),
        value: value.to_string(),
        desc: "número entero de horas",
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "yes" | "true" | "1" | "si" | "sí" => Ok(true),
        "no" | "false" | "0" => Ok(false),
        _ => Err(BalanceError::WrongValue {
            key: key.to_string(),
            value: value.to_string(),
            desc: "yes/no",
        }),
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.entries() {
            writeln!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}

impl str::FromStr for ParameterSet {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<ParameterSet> {
        let s_nobom = s.trim_start_matches('\u{feff}');
        let mut params = ParameterSet::default();
        for (idx, line) in s_nobom.lines().enumerate() {
            // Comentarios al final de la línea
            let line = line.splitn(2, '#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let mut parts = line.splitn(2, ':');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if !key.trim().is_empty() => params.set(key, value)?,
                _ => {
                    return Err(BalanceError::ParseLine {
                        line: idx + 1,
                        content: line.to_string(),
                    })
                }
            }
        }
        Ok(params)
    }
}
