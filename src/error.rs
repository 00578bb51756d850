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
Errores
=======

Errores de interpretación y validación de parámetros y de generación de informes.

El cálculo del balance no produce errores: las divisiones por rendimientos o COP nulos se
resuelven como consumo nulo.
*/

use failure::Fail;

/// Error de dhbalance
#[derive(Debug, Fail)]
pub enum BalanceError {
    /// Línea que no sigue el formato `clave: valor`
    #[fail(display = "Línea {} con formato incorrecto: \"{}\"", line, content)]
    ParseLine {
        /// Número de línea (desde 1)
        line: usize,
        /// Contenido de la línea
        content: String,
    },
    /// Clave de parámetro desconocida
    #[fail(display = "Parámetro desconocido: \"{}\"", _0)]
    UnknownKey(String),
    /// Valor no interpretable para un parámetro
    #[fail(display = "Valor \"{}\" no válido para {} ({})", value, key, desc)]
    WrongValue {
        /// Parámetro
        key: String,
        /// Valor encontrado
        value: String,
        /// Tipo esperado
        desc: &'static str,
    },
    /// Parámetro fuera de rango
    #[fail(display = "El parámetro {} debe estar en {} y vale {}", key, range, value)]
    OutOfRange {
        /// Parámetro
        key: &'static str,
        /// Valor encontrado
        value: f64,
        /// Rango admisible
        range: &'static str,
    },
    /// Error al generar un informe
    #[fail(display = "No se ha podido generar el informe: {}", _0)]
    Render(String),
}

impl From<serde_json::Error> for BalanceError {
    fn from(err: serde_json::Error) -> Self {
        BalanceError::Render(err.to_string())
    }
}

/// Resultado con error de dhbalance
pub type Result<T> = std::result::Result<T, BalanceError>;
