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
dhbalance
=========

This crate provides a library and binary that **computes the energy balance of a district
heating site** served by a gas boiler and, optionally, a combined heat and power unit (CHP) and
a heat pump (HP).

For a set of site data (envelope area and U-value, indoor and outdoor temperatures, system
losses, boiler efficiency, CO2 emission factor and CHP / HP ratings) it computes:

- the daily balance: heat demand, CHP and HP thermal output, CHP gas and HP electricity use,
  residual boiler heat and gas, and CO2 emissions
- a twelve month forecast using a fixed table of mean outdoor temperatures

It holds the following assumptions:

- heat demand is the conductive loss of the envelope, increased by the system losses
- CHP and HP deliver their (adjusted) rated output for their daily running hours, regardless of
  the outdoor temperature
- the boiler covers the remaining demand, which is never negative
- zero or negative boiler efficiency or COP mean zero consumption, not an error

Este *crate* proporciona una biblioteca y un programa que **calcula el balance energético de un
emplazamiento con red de calor** servido por caldera de gas y, opcionalmente, cogeneración (CHP)
y bomba de calor (HP).

# Ejemplo

```rust
use dhbalance::*;

// Valores del perfil Barnwell con la temperatura exterior modificada por el usuario
let user = types::ParameterSet {
    outdoor_temp: Some(-2.0),
    ..Default::default()
};
let params = profiles::get_profile("Barnwell").merge(&user).resolve();

// Balance diario y previsión mensual
let daily = compute_daily_balance(&params);
let forecast = compute_monthly_forecast(&params);
assert!(daily.boiler_thermal >= 0.0);
assert_eq!(forecast.len(), 12);

// Visualización compacta
let balance = site_balance("Barnwell", &params, types::Co2Scope::BoilerAndChp);
println!("{}", report::PlainRenderer.render(&balance).unwrap());
```

*/

#![deny(missing_docs)]

mod balance;

pub mod climate;
pub mod error;
pub mod profiles;
pub mod report;
pub mod types;

pub use balance::*;
pub use report::BalanceRenderer;

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
