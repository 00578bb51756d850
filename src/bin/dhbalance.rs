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

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;

use clap::{App, AppSettings, Arg, ArgMatches};
use failure::Error;
use failure::ResultExt;
use tracing::{debug, info, warn, Level};

use dhbalance::{
    profiles::{self, CUSTOM_PROFILE},
    report::OutputFormat,
    site_balance,
    types::{Co2Scope, InputParameters, ParameterSet},
};

/// Parámetros que se pueden definir individualmente desde la línea de comandos
static PARAM_ARGS: [(&str, &str); 16] = [
    ("area", "Superficie de la envolvente [m2]"),
    ("u_value", "Transmitancia térmica de la envolvente [W/m2K]"),
    ("indoor_temp", "Temperatura interior [ºC]"),
    ("outdoor_temp", "Temperatura exterior [ºC]"),
    ("system_loss", "Pérdidas del sistema, fracción de la demanda [0, 1]"),
    ("boiler_eff", "Rendimiento de la caldera (0, 1]"),
    ("co2_factor", "Factor de emisión del gas [kg_CO2/kWh]"),
    ("elec_price", "Precio de la electricidad [€/kWh]"),
    ("chp_thermal_output", "Potencia térmica de la cogeneración [kW]"),
    ("chp_elec_output", "Potencia eléctrica de la cogeneración [kW]"),
    ("chp_gas_input", "Consumo de gas de la cogeneración [kW]"),
    ("chp_hours_per_day", "Horas diarias de funcionamiento de la cogeneración [0, 24]"),
    ("chp_adjustment", "Factor de ajuste de la cogeneración [0, 1]"),
    ("hp_thermal_output", "Potencia térmica de la bomba de calor [kW]"),
    ("hp_hours_per_day", "Horas diarias de funcionamiento de la bomba de calor [0, 24]"),
    ("hp_cop", "COP de la bomba de calor"),
];

const LICENSE: &str = "
Copyright (c) 2024  Prepay Power energy team

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.";

// Funciones auxiliares -----------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("Archivo {} no encontrado", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Error al leer el archivo")?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) -> Result<(), Error> {
    let mut file = File::create(path)
        .context(format!("No se ha podido crear el archivo {}", path.display()))?;
    file.write_all(content)
        .context(format!("No se ha podido escribir en {}", path.display()))?;
    Ok(())
}

/// Escribe un archivo de salida o termina el programa
fn write_or_exit(path: &Path, content: &str, descr: &str) {
    if let Err(err) = writefile(path, content.as_bytes()) {
        eprintln!("ERROR: {} ({})", err, descr);
        exit(exitcode::CANTCREAT);
    }
    info!("Guardado archivo de {}: {}", descr, path.display());
}

/// Nivel de detalle de los mensajes según el número de opciones -v
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Obtención de parámetros

/// Carga parámetros desde archivo o devuelve un conjunto vacío
fn get_file_params(archivo: Option<&str>) -> ParameterSet {
    let archivo = match archivo {
        Some(archivo) => archivo,
        None => return ParameterSet::default(),
    };
    let path = Path::new(archivo);
    let contents = readfile(path).unwrap_or_else(|err| {
        eprintln!(
            "ERROR: No se ha podido leer el archivo de parámetros \"{}\" -> {}",
            path.display(),
            err
        );
        exit(exitcode::IOERR);
    });
    let params = contents.parse::<ParameterSet>().unwrap_or_else(|err| {
        eprintln!(
            "ERROR: Formato incorrecto del archivo de parámetros \"{}\" ({})",
            path.display(),
            err
        );
        exit(exitcode::DATAERR);
    });
    info!("Parámetros (archivo): \"{}\"", path.display());
    params
}

/// Parámetros definidos en la línea de comandos
fn get_cli_params(matches: &ArgMatches<'_>) -> ParameterSet {
    let mut params = ParameterSet::default();
    for (key, _) in PARAM_ARGS.iter() {
        if let Some(value) = matches.value_of(key) {
            if let Err(err) = params.set(key, value) {
                eprintln!("ERROR: {}", err);
                exit(exitcode::DATAERR);
            }
        }
    }
    if matches.is_present("chp") {
        params.chp_installed = Some(true);
    } else if matches.is_present("no_chp") {
        params.chp_installed = Some(false);
    }
    if matches.is_present("hp") {
        params.hp_installed = Some(true);
    } else if matches.is_present("no_hp") {
        params.hp_installed = Some(false);
    }
    if !params.is_empty() {
        info!("Parámetros (usuario):\n{}", params);
    }
    params
}

/// Avisos sobre datos válidos pero probablemente incompletos
fn warn_suspicious(params: &InputParameters) {
    if params.area == 0.0 {
        warn!("AVISO: superficie nula, la demanda de calor es nula");
    }
    if params.chp_installed && params.chp_hours_per_day == 0 {
        warn!("AVISO: cogeneración instalada sin horas de funcionamiento");
    }
    if params.hp_installed && params.hp_cop <= 0.0 {
        warn!(
            "AVISO: COP de la bomba de calor nulo o negativo, \
             no se computa su consumo eléctrico"
        );
    }
}

// Función principal ------------------------------------------------------------------------------

fn main() {
    let site_names = profiles::profile_names();

    let mut app = App::new("dhbalance")
        .bin_name("dhbalance")
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "dhbalance - Balance energético de redes de calor con caldera, cogeneración \
             y bomba de calor.",
        )
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("site")
            .short("s")
            .long("site")
            .value_name("EMPLAZAMIENTO")
            .possible_values(&site_names)
            .default_value(CUSTOM_PROFILE)
            .help("Perfil de emplazamiento con valores predefinidos")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("archivo_parametros")
            .short("p")
            .long("archivo_parametros")
            .value_name("ARCHIVO_PARAMETROS")
            .help("Archivo de parámetros (clave: valor), con prioridad sobre el perfil")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("chp")
            .long("chp")
            .conflicts_with("no_chp")
            .help("Con cogeneración"))
        .arg(Arg::with_name("no_chp")
            .long("no_chp")
            .help("Sin cogeneración"))
        .arg(Arg::with_name("hp")
            .long("hp")
            .conflicts_with("no_hp")
            .help("Con bomba de calor"))
        .arg(Arg::with_name("no_hp")
            .long("no_hp")
            .help("Sin bomba de calor"))
        .arg(Arg::with_name("co2_solo_caldera")
            .long("co2_solo_caldera")
            .help("Excluye el gas de la cogeneración de las emisiones de CO2"))
        .arg(Arg::with_name("formato")
            .short("f")
            .long("formato")
            .value_name("FORMATO")
            .possible_values(&["plain", "json", "csv"])
            .default_value("plain")
            .help("Formato de la salida por pantalla")
            .takes_value(true))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("ARCHIVO_SALIDA_JSON")
            .help("Archivo de salida de resultados detallados en formato JSON")
            .takes_value(true))
        .arg(Arg::with_name("archivo_salida_csv")
            .long("csv")
            .value_name("ARCHIVO_SALIDA_CSV")
            .help("Archivo de salida de la previsión mensual en formato CSV")
            .takes_value(true))
        .arg(Arg::with_name("gen_archivo_parametros")
            .long("op")
            .value_name("GEN_ARCHIVO_PARAMETROS")
            .help("Archivo de salida de los parámetros usados en el cálculo")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("licencia")
            .help("Muestra la licencia del programa (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"));

    for (key, help) in PARAM_ARGS.iter() {
        app = app.arg(
            Arg::with_name(*key)
                .long(*key)
                .value_name("VALOR")
                .allow_hyphen_values(true)
                .help(*help)
                .takes_value(true),
        );
    }

    let matches = app.get_matches();

    if matches.is_present("showlicense") {
        println!("{}", LICENSE);
        exit(exitcode::OK);
    }

    // Prólogo ------------------------------------------------------------------------------------

    init_logging(matches.occurrences_of("v"));
    debug!("Opciones indicadas: {:#?}", matches);

    // Parámetros: usuario > archivo > perfil > valores por defecto -------------------------------
    let site = matches.value_of("site").unwrap_or(CUSTOM_PROFILE);
    let profile_params = profiles::get_profile(site);
    info!("Emplazamiento: {}", site);

    let file_params = get_file_params(matches.value_of("archivo_parametros"));
    let cli_params = get_cli_params(&matches);

    let params = profile_params
        .merge(&file_params)
        .merge(&cli_params)
        .resolve();

    if let Err(err) = params.validate() {
        eprintln!("ERROR: {}", err);
        exit(exitcode::DATAERR);
    }
    warn_suspicious(&params);

    // Guardado de parámetros ---------------------------------------------------------------------
    if let Some(archivo) = matches.value_of("gen_archivo_parametros") {
        let content = ParameterSet::from(params).to_string();
        write_or_exit(Path::new(archivo), &content, "parámetros");
    }

    // Cálculo del balance -------------------------------------------------------------------------
    let co2_scope = if matches.is_present("co2_solo_caldera") {
        Co2Scope::BoilerOnly
    } else {
        Co2Scope::BoilerAndChp
    };
    let balance = site_balance(site, &params, co2_scope);

    // Salida de resultados ------------------------------------------------------------------------
    let outputs = [
        ("archivo_salida_json", OutputFormat::Json, "resultados JSON"),
        ("archivo_salida_csv", OutputFormat::Csv, "previsión mensual CSV"),
    ];
    for (arg, format, descr) in outputs.iter() {
        if let Some(archivo) = matches.value_of(arg) {
            let content = format.renderer().render(&balance).unwrap_or_else(|err| {
                eprintln!("ERROR: {}", err);
                exit(exitcode::SOFTWARE);
            });
            write_or_exit(Path::new(archivo), &content, descr);
        }
    }

    let format = matches
        .value_of("formato")
        .and_then(|f| f.parse::<OutputFormat>().ok())
        .unwrap_or(OutputFormat::Plain);
    match format.renderer().render(&balance) {
        Ok(out) => print!("{}", out),
        Err(err) => {
            eprintln!("ERROR: {}", err);
            exit(exitcode::SOFTWARE);
        }
    }
}
