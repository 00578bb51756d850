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
Perfiles de emplazamiento
=========================

Catálogo fijo de emplazamientos con valores predefinidos para los datos de entrada.

El perfil "Custom" no define ningún valor. Los nombres desconocidos se tratan igual que "Custom":
el usuario completa los datos y el resto toma valores por defecto (`ParameterSet::resolve`).
*/

use crate::types::ParameterSet;

/// Nombre del perfil sin valores predefinidos
pub const CUSTOM_PROFILE: &str = "Custom";

/// Emplazamiento con sus valores predefinidos
#[derive(Debug, Clone, PartialEq)]
pub struct SiteProfile {
    /// Nombre del emplazamiento
    pub name: &'static str,
    /// Valores predefinidos
    pub params: ParameterSet,
}

/// Barnwell
pub const BARNWELL: SiteProfile = SiteProfile {
    name: "Barnwell",
    params: ParameterSet {
        area: Some(22102.0),
        u_value: Some(0.15),
        indoor_temp: Some(20.0),
        outdoor_temp: Some(5.0),
        system_loss: Some(0.50),
        boiler_eff: Some(0.85),
        co2_factor: Some(0.23),
        elec_price: Some(0.25),
        chp_installed: Some(true),
        chp_thermal_output: Some(44.7),
        chp_elec_output: Some(19.965),
        chp_gas_input: Some(67.9),
        chp_hours_per_day: Some(15),
        chp_adjustment: Some(0.95),
        hp_installed: Some(true),
        hp_thermal_output: Some(60.0),
        hp_hours_per_day: Some(9),
        hp_cop: Some(4.0),
    },
};

/// Perfil vacío
pub const CUSTOM: SiteProfile = SiteProfile {
    name: CUSTOM_PROFILE,
    params: ParameterSet::EMPTY,
};

/// Catálogo de perfiles. El perfil vacío va siempre el último.
pub static SITE_PROFILES: [SiteProfile; 2] = [BARNWELL, CUSTOM];

/// Nombres de los perfiles del catálogo, en orden
pub fn profile_names() -> Vec<&'static str> {
    SITE_PROFILES.iter().map(|p| p.name).collect()
}

/// Perfil con el nombre indicado, si existe
pub fn find_profile(name: &str) -> Option<&'static SiteProfile> {
    SITE_PROFILES.iter().find(|p| p.name == name)
}

/// Valores predefinidos del perfil indicado
///
/// Returns an empty set for "Custom" and for unknown names, never an error.
pub fn get_profile(name: &str) -> ParameterSet {
    find_profile(name).map(|p| p.params).unwrap_or_default()
}
