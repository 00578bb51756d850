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
Balance energético del emplazamiento
====================================

Cálculo del balance diario y de la previsión mensual de una red de calor con caldera de gas y,
opcionalmente, cogeneración (CHP) y bomba de calor (HP).

- La demanda de calor se obtiene de las pérdidas por transmisión de la envolvente
  (U · A · ΔT), incrementadas con las pérdidas del sistema.
- La cogeneración y la bomba de calor aportan su potencia nominal (ajustada en el caso de la
  cogeneración) durante las horas de funcionamiento diarias, con independencia de la temperatura.
- La caldera cubre la demanda restante, que nunca es negativa.

Los cálculos no fallan: rendimientos o COP nulos o negativos dan lugar a consumos nulos.
*/

use serde_derive::{Deserialize, Serialize};

use crate::{
    climate::MONTHLY_CLIMATE,
    types::{Co2Scope, DailyBalance, ForecastTotals, InputParameters, MonthlyForecastEntry},
};

/// Datos y resultados del balance de un emplazamiento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteBalance {
    /// Nombre del emplazamiento
    pub site: String,
    /// Datos de entrada
    pub params: InputParameters,
    /// Alcance de las emisiones de CO2
    pub co2_scope: Co2Scope,
    /// Balance diario para la temperatura exterior de los datos de entrada
    pub daily: DailyBalance,
    /// Previsión mensual, de enero a diciembre
    pub monthly: Vec<MonthlyForecastEntry>,
    /// Totales anuales de la previsión mensual
    pub annual: ForecastTotals,
}

/// Demanda de calor diaria para una temperatura exterior [kWh/día]
///
/// U [W/m2K] · A [m2] · ΔT [K] · 24 [h] / 1000, incrementada con las pérdidas del sistema.
fn daily_heat_demand(params: &InputParameters, outdoor_temp: f64) -> f64 {
    params.u_value * params.area * (params.indoor_temp - outdoor_temp) * 24.0 / 1000.0
        * (1.0 + params.system_loss)
}

/// Calor diario de la cogeneración [kWh/día], nulo si no está instalada
fn chp_daily_thermal(params: &InputParameters) -> f64 {
    if params.chp_installed {
        params.chp_thermal_output * params.chp_adjustment * f64::from(params.chp_hours_per_day)
    } else {
        0.0
    }
}

/// Calor diario de la bomba de calor [kWh/día], nulo si no está instalada
fn hp_daily_thermal(params: &InputParameters) -> f64 {
    if params.hp_installed {
        params.hp_thermal_output * f64::from(params.hp_hours_per_day)
    } else {
        0.0
    }
}

/// Calcula el balance energético diario
///
/// Compute the daily balance. Total CO2 includes both boiler and CHP gas.
pub fn compute_daily_balance(params: &InputParameters) -> DailyBalance {
    compute_daily_balance_with(params, Co2Scope::BoilerAndChp)
}

/// Calcula el balance energético diario con el alcance de emisiones indicado
///
/// Compute the daily balance choosing whether CHP gas counts towards total CO2.
pub fn compute_daily_balance_with(params: &InputParameters, co2_scope: Co2Scope) -> DailyBalance {
    let heat_demand = daily_heat_demand(params, params.outdoor_temp);

    let chp_thermal = chp_daily_thermal(params);
    let chp_gas_consumed = if params.chp_installed {
        params.chp_gas_input * params.chp_adjustment * f64::from(params.chp_hours_per_day)
    } else {
        0.0
    };

    let hp_thermal = hp_daily_thermal(params);
    let hp_electric_consumed = if params.hp_installed && params.hp_cop > 0.0 {
        hp_thermal / params.hp_cop
    } else {
        0.0
    };

    let boiler_thermal = (heat_demand - chp_thermal - hp_thermal).max(0.0);
    let boiler_gas_input = if params.boiler_eff > 0.0 {
        boiler_thermal / params.boiler_eff
    } else {
        0.0
    };

    let total_co2 = match co2_scope {
        Co2Scope::BoilerAndChp => (boiler_gas_input + chp_gas_consumed) * params.co2_factor,
        Co2Scope::BoilerOnly => boiler_gas_input * params.co2_factor,
    };

    DailyBalance {
        heat_demand,
        chp_thermal,
        chp_gas_consumed,
        hp_thermal,
        hp_electric_consumed,
        boiler_thermal,
        boiler_gas_input,
        total_co2,
    }
}

/// Calcula la previsión mensual de demanda y aportes, de enero a diciembre
///
/// Compute the monthly forecast using the fixed climate table. Only heating depends on the
/// monthly temperature; CHP and HP contribute their daily output times the days of the month.
pub fn compute_monthly_forecast(params: &InputParameters) -> Vec<MonthlyForecastEntry> {
    MONTHLY_CLIMATE
        .iter()
        .map(|climate| {
            let days = f64::from(climate.days);
            let heating = daily_heat_demand(params, climate.mean_outdoor_temp) * days;
            let chp = chp_daily_thermal(params) * days;
            let hp = hp_daily_thermal(params) * days;
            let boiler = (heating - chp - hp).max(0.0);
            MonthlyForecastEntry {
                month: climate.month,
                heating,
                chp,
                hp,
                boiler,
            }
        })
        .collect()
}

/// Suma anual de la previsión mensual
pub fn forecast_totals(entries: &[MonthlyForecastEntry]) -> ForecastTotals {
    entries
        .iter()
        .fold(ForecastTotals::default(), |mut acc, e| {
            acc.heating += e.heating;
            acc.chp += e.chp;
            acc.hp += e.hp;
            acc.boiler += e.boiler;
            acc
        })
}

/// Calcula el balance completo de un emplazamiento
///
/// Daily balance, monthly forecast and yearly totals bundled for the renderers.
pub fn site_balance(site: &str, params: &InputParameters, co2_scope: Co2Scope) -> SiteBalance {
    let daily = compute_daily_balance_with(params, co2_scope);
    let monthly = compute_monthly_forecast(params);
    let annual = forecast_totals(&monthly);

    tracing::debug!(
        site,
        heat_demand = daily.heat_demand,
        boiler_thermal = daily.boiler_thermal,
        total_co2 = daily.total_co2,
        annual_heating = annual.heating,
        "computed site balance"
    );

    SiteBalance {
        site: site.to_string(),
        params: *params,
        co2_scope,
        daily,
        monthly,
        annual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::get_profile;
    use pretty_assertions::assert_eq;

    fn barnwell() -> InputParameters {
        get_profile("Barnwell").resolve()
    }

    #[test]
    fn daily_heat_demand_formula() {
        let p = InputParameters {
            area: 100.0,
            u_value: 0.5,
            indoor_temp: 21.0,
            outdoor_temp: 1.0,
            system_loss: 0.0,
            ..Default::default()
        };
        // 0.5 · 100 · 20 · 24 / 1000
        assert_eq!(compute_daily_balance(&p).heat_demand, 24.0);
    }

    #[test]
    fn daily_boiler_covers_residual() {
        let b = compute_daily_balance(&barnwell());
        let residual = b.heat_demand - b.chp_thermal - b.hp_thermal;
        assert_eq!(b.boiler_thermal, residual);
        assert_eq!(b.hp_electric_consumed, b.hp_thermal / 4.0);
    }

    #[test]
    fn daily_boiler_never_negative() {
        let p = InputParameters {
            hp_thermal_output: 10_000.0,
            hp_hours_per_day: 24,
            ..barnwell()
        };
        let b = compute_daily_balance(&p);
        assert_eq!(b.boiler_thermal, 0.0);
        assert_eq!(b.boiler_gas_input, 0.0);
        // Solo quedan las emisiones de la cogeneración
        assert_eq!(b.total_co2, b.chp_gas_consumed * p.co2_factor);
    }

    #[test]
    fn daily_co2_scope() {
        let p = barnwell();
        let with_chp = compute_daily_balance_with(&p, Co2Scope::BoilerAndChp);
        let boiler_only = compute_daily_balance_with(&p, Co2Scope::BoilerOnly);
        assert_eq!(with_chp, compute_daily_balance(&p));
        assert_eq!(boiler_only.total_co2, boiler_only.boiler_gas_input * p.co2_factor);
        assert!(with_chp.total_co2 > boiler_only.total_co2);
        assert_eq!(with_chp.boiler_gas_input, boiler_only.boiler_gas_input);
    }

    #[test]
    fn monthly_uses_table_temperatures() {
        let p = barnwell();
        let forecast = compute_monthly_forecast(&p);
        assert_eq!(forecast.len(), 12);
        // Enero tiene la misma temperatura media que el dato de entrada (5ºC)
        let daily = compute_daily_balance(&p);
        assert_eq!(forecast[0].heating, daily.heat_demand * 31.0);
        assert_eq!(forecast[0].chp, daily.chp_thermal * 31.0);
        assert_eq!(forecast[1].hp, daily.hp_thermal * 28.0);
        // Julio y agosto: misma temperatura y días
        assert_eq!(forecast[6].heating, forecast[7].heating);
    }

    #[test]
    fn monthly_totals() {
        let forecast = compute_monthly_forecast(&barnwell());
        let totals = forecast_totals(&forecast);
        let hp_sum: f64 = forecast.iter().map(|e| e.hp).sum();
        assert_eq!(totals.hp, hp_sum);
        assert_eq!(totals.hp, 60.0 * 9.0 * 365.0);
        assert_eq!(forecast_totals(&[]), ForecastTotals::default());
    }

    #[test]
    fn site_balance_bundle() {
        let p = barnwell();
        let bal = site_balance("Barnwell", &p, Co2Scope::BoilerOnly);
        assert_eq!(bal.site, "Barnwell");
        assert_eq!(bal.params, p);
        assert_eq!(bal.daily, compute_daily_balance_with(&p, Co2Scope::BoilerOnly));
        assert_eq!(bal.monthly, compute_monthly_forecast(&p));
        assert_eq!(bal.annual, forecast_totals(&bal.monthly));
    }
}
