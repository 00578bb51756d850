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
Informes del balance
====================

Representaciones del balance de un emplazamiento (`SiteBalance`):

- `PlainRenderer`: informe de texto compacto
- `JsonRenderer`: documento JSON con datos y resultados
- `CsvRenderer`: tabla de la previsión mensual

Todas implementan `BalanceRenderer`, de modo que la CLI (u otra interfaz) puede elegir la salida
sin conocer su formato.
*/

use itertools::Itertools; // join
use strum_macros::{Display, EnumString};

use crate::{
    error::Result,
    types::{DailyBalance, InputParameters, MonthlyForecastEntry},
    SiteBalance,
};

/// Cualquier cosa capaz de representar un balance
pub trait BalanceRenderer {
    /// Representa el balance como texto
    fn render(&self, balance: &SiteBalance) -> Result<String>;
}

/// Formato de salida
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString)]
pub enum OutputFormat {
    /// Texto
    #[strum(serialize = "plain")]
    Plain,
    /// JSON
    #[strum(serialize = "json")]
    Json,
    /// CSV de la previsión mensual
    #[strum(serialize = "csv")]
    Csv,
}

impl OutputFormat {
    /// Representación asociada al formato
    pub fn renderer(self) -> Box<dyn BalanceRenderer> {
        match self {
            OutputFormat::Plain => Box::new(PlainRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
            OutputFormat::Csv => Box::new(CsvRenderer),
        }
    }
}

/// Informe de texto
#[derive(Debug, Default, Copy, Clone)]
pub struct PlainRenderer;

/// Documento JSON
#[derive(Debug, Default, Copy, Clone)]
pub struct JsonRenderer;

/// Tabla CSV de la previsión mensual
#[derive(Debug, Default, Copy, Clone)]
pub struct CsvRenderer;

fn yes_no(value: bool) -> &'static str {
    if value {
        "sí"
    } else {
        "no"
    }
}

fn params_to_plain(p: &InputParameters) -> String {
    let chp = if p.chp_installed {
        format!(
            "sí, {:.2} kW térmicos, {:.2} kW eléctricos, {:.2} kW de gas, {} h/día, ajuste {:.2}",
            p.chp_thermal_output,
            p.chp_elec_output,
            p.chp_gas_input,
            p.chp_hours_per_day,
            p.chp_adjustment
        )
    } else {
        yes_no(false).to_string()
    };
    let hp = if p.hp_installed {
        format!(
            "sí, {:.2} kW térmicos, {} h/día, COP {:.2}",
            p.hp_thermal_output, p.hp_hours_per_day, p.hp_cop
        )
    } else {
        yes_no(false).to_string()
    };
    format!(
        "Superficie = {:.2} [m2]
U = {:.3} [W/m2K]
T_int = {:.1} [ºC], T_ext = {:.1} [ºC]
Pérdidas del sistema = {:.2}
Rendimiento de caldera = {:.2}
Factor de emisión = {:.3} [kg_CO2/kWh]
Precio de la electricidad = {:.3} [€/kWh]
Cogeneración: {}
Bomba de calor: {}",
        p.area,
        p.u_value,
        p.indoor_temp,
        p.outdoor_temp,
        p.system_loss,
        p.boiler_eff,
        p.co2_factor,
        p.elec_price,
        chp,
        hp
    )
}

fn daily_to_plain(d: &DailyBalance) -> String {
    format!(
        "Demanda de calor: {:.2}
- CHP: {:.2} (gas: {:.2})
- Bomba de calor: {:.2} (electricidad: {:.2})
- Caldera: {:.2} (gas: {:.2})",
        d.heat_demand,
        d.chp_thermal,
        d.chp_gas_consumed,
        d.hp_thermal,
        d.hp_electric_consumed,
        d.boiler_thermal,
        d.boiler_gas_input
    )
}

fn monthly_row(e: &MonthlyForecastEntry) -> String {
    format!(
        "{:<4} {:>12.1} {:>12.1} {:>12.1} {:>12.1}",
        e.month.to_string(),
        e.heating,
        e.chp,
        e.hp,
        e.boiler
    )
}

impl BalanceRenderer for PlainRenderer {
    fn render(&self, balance: &SiteBalance) -> Result<String> {
        let SiteBalance {
            site,
            params,
            co2_scope,
            daily,
            monthly,
            annual,
        } = balance;

        let rows = monthly.iter().map(monthly_row).join("\n");

        Ok(format!(
            "** Emplazamiento: {}

** Datos de entrada
{}

** Balance diario [kWh/día]
{}

Emisiones de CO2 ({}): {:.2} [kg_CO2/día]

** Previsión mensual [kWh]
{:<4} {:>12} {:>12} {:>12} {:>12}
{}
{:<4} {:>12.1} {:>12.1} {:>12.1} {:>12.1}
",
            site,
            params_to_plain(params),
            daily_to_plain(daily),
            co2_scope,
            daily.total_co2,
            "Mes",
            "Calefacción",
            "CHP",
            "HP",
            "Caldera",
            rows,
            "Año",
            annual.heating,
            annual.chp,
            annual.hp,
            annual.boiler
        ))
    }
}

impl BalanceRenderer for JsonRenderer {
    fn render(&self, balance: &SiteBalance) -> Result<String> {
        Ok(serde_json::to_string_pretty(balance)?)
    }
}

impl BalanceRenderer for CsvRenderer {
    fn render(&self, balance: &SiteBalance) -> Result<String> {
        let rows = balance
            .monthly
            .iter()
            .map(|e| {
                format!(
                    "{},{:.2},{:.2},{:.2},{:.2}",
                    e.month, e.heating, e.chp, e.hp, e.boiler
                )
            })
            .join("\n");
        Ok(format!("month,heating,chp,hp,boiler\n{}\n", rows))
    }
}
