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
Datos climáticos mensuales
==========================

Temperatura exterior media y número de días de cada mes, usados en la previsión mensual.
Año no bisiesto.
*/

use crate::types::Month;

/// Datos climáticos de un mes
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonthClimate {
    /// Mes
    pub month: Month,
    /// Temperatura exterior media [ºC]
    pub mean_outdoor_temp: f64,
    /// Días del mes
    pub days: u32,
}

/// Tabla climática mensual, de enero a diciembre
pub const MONTHLY_CLIMATE: [MonthClimate; 12] = [
    MonthClimate {
        month: Month::Jan,
        mean_outdoor_temp: 5.0,
        days: 31,
    },
    MonthClimate {
        month: Month::Feb,
        mean_outdoor_temp: 5.5,
        days: 28,
    },
    MonthClimate {
        month: Month::Mar,
        mean_outdoor_temp: 7.0,
        days: 31,
    },
    MonthClimate {
        month: Month::Apr,
        mean_outdoor_temp: 9.0,
        days: 30,
    },
    MonthClimate {
        month: Month::May,
        mean_outdoor_temp: 11.0,
        days: 31,
    },
    MonthClimate {
        month: Month::Jun,
        mean_outdoor_temp: 13.5,
        days: 30,
    },
    MonthClimate {
        month: Month::Jul,
        mean_outdoor_temp: 15.0,
        days: 31,
    },
    MonthClimate {
        month: Month::Aug,
        mean_outdoor_temp: 15.0,
        days: 31,
    },
    MonthClimate {
        month: Month::Sep,
        mean_outdoor_temp: 13.0,
        days: 30,
    },
    MonthClimate {
        month: Month::Oct,
        mean_outdoor_temp: 10.0,
        days: 31,
    },
    MonthClimate {
        month: Month::Nov,
        mean_outdoor_temp: 7.0,
        days: 30,
    },
    MonthClimate {
        month: Month::Dec,
        mean_outdoor_temp: 5.5,
        days: 31,
    },
];
