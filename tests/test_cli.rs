use std::fs;

#[test]
fn barnwell_plain() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell"])
        .stdout()
        .contains("Demanda de calor: 1790.26")
        .stdout()
        .contains("- Caldera: 613.29 (gas: 721.51)")
        .stdout()
        .contains("Emisiones de CO2 (boiler+chp): 388.49 [kg_CO2/día]")
        .unwrap();
}

#[test]
fn barnwell_co2_boiler_only() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell", "--co2_solo_caldera"])
        .stdout()
        .contains("Emisiones de CO2 (boiler): 165.95 [kg_CO2/día]")
        .unwrap();
}

#[test]
fn barnwell_with_params_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell", "-p", "test_data/barnwell_frio.txt"])
        .stdout()
        .contains("T_int = 20.0 [ºC], T_ext = -3.0 [ºC]")
        .stdout()
        .contains("- Bomba de calor: 0.00 (electricidad: 0.00)")
        .stdout()
        .contains("- Caldera: 2108.09")
        .unwrap();
}

#[test]
fn user_options_override_file() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-s",
            "Barnwell",
            "-p",
            "test_data/barnwell_frio.txt",
            "--outdoor_temp",
            "5",
            "--hp",
        ])
        .stdout()
        .contains("Demanda de calor: 1790.26")
        .stdout()
        .contains("- Bomba de calor: 540.00 (electricidad: 135.00)")
        .unwrap();
}

#[test]
fn custom_site_from_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/pequeno.txt"])
        .stdout()
        .contains("** Emplazamiento: Custom")
        .stdout()
        .contains("Demanda de calor: 240.00")
        .stdout()
        .contains("- Caldera: 240.00 (gas: 300.00)")
        .stdout()
        .contains("Emisiones de CO2 (boiler+chp): 60.00")
        .unwrap();
}

#[test]
fn negative_outdoor_temperature_option() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/pequeno.txt", "--outdoor_temp", "-9"])
        .stdout()
        .contains("Demanda de calor: 360.00")
        .unwrap();
}

#[test]
fn csv_output() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell", "-f", "csv"])
        .stdout()
        .contains("month,heating,chp,hp,boiler\nJan,55498.12,19746.23,16740.00,19011.90")
        .stdout()
        .contains("Jul,18499.37,19746.23,16740.00,0.00")
        .unwrap();
}

#[test]
fn json_output() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell", "-f", "json"])
        .stdout()
        .contains(r#""site": "Barnwell""#)
        .stdout()
        .contains(r#""co2_scope": "boiler_and_chp""#)
        .unwrap();
}

#[test]
fn unknown_parameter_in_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/parametros_erroneos.txt"])
        .fails_with(65)
        .stderr()
        .contains("Parámetro desconocido: \"cubierta\"")
        .unwrap();
}

#[test]
fn missing_params_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/no_existe.txt"])
        .fails_with(74)
        .unwrap();
}

#[test]
fn out_of_range_parameter() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell", "--boiler_eff", "1.5"])
        .fails_with(65)
        .stderr()
        .contains("boiler_eff")
        .unwrap();
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell", "--chp_hours_per_day", "30"])
        .fails_with(65)
        .unwrap();
}

#[test]
fn unknown_site() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Ballymun"])
        .fails()
        .unwrap();
}

#[test]
fn saves_resolved_parameters() {
    let path = std::env::temp_dir().join("dhbalance_test_params.txt");
    let path_str = path.to_str().unwrap();
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell", "--area", "1000", "--op", path_str])
        .unwrap();
    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.contains("area: 1000\n"));
    assert!(saved.contains("chp_installed: yes\n"));
    assert!(saved.contains("hp_cop: 4\n"));
    // El archivo guardado reproduce el cálculo
    let params = saved.parse::<dhbalance::types::ParameterSet>().unwrap();
    assert_eq!(params.resolve().area, 1000.0);
    fs::remove_file(&path).unwrap();
}

#[test]
fn long_option_names() {
    assert_cli::Assert::main_binary()
        .with_args(&["--site", "Barnwell", "--formato", "csv", "--co2_solo_caldera"])
        .stdout()
        .contains("month,heating,chp,hp,boiler")
        .unwrap();
    assert_cli::Assert::main_binary()
        .with_args(&["--site", "Barnwell", "--archivo_parametros", "test_data/pequeno.txt"])
        .stdout()
        .contains("T_int = 21.0 [ºC], T_ext = 1.0 [ºC]")
        .unwrap();
}

#[test]
fn equipment_switches() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell", "--no_chp"])
        .stdout()
        .contains("- CHP: 0.00 (gas: 0.00)")
        .stdout()
        .contains("Cogeneración: no")
        .unwrap();
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell", "--no_hp"])
        .stdout()
        .contains("- Bomba de calor: 0.00 (electricidad: 0.00)")
        .unwrap();
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/pequeno.txt", "--chp", "--chp_thermal_output", "10"])
        .stdout()
        .contains("Cogeneración: sí, 10.00 kW térmicos")
        .unwrap();
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell", "--chp", "--no_chp"])
        .fails()
        .unwrap();
}

#[test]
fn non_positive_cop_warns() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell", "--hp_cop", "-1"])
        .stdout()
        .contains("- Bomba de calor: 540.00 (electricidad: 0.00)")
        .stderr()
        .contains("COP de la bomba de calor nulo o negativo")
        .unwrap();
}

#[test]
fn writes_json_and_csv_files() {
    let dir = std::env::temp_dir();
    let json_path = dir.join("dhbalance_test_resultados.json");
    let csv_path = dir.join("dhbalance_test_prevision.csv");
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-s",
            "Barnwell",
            "--json",
            json_path.to_str().unwrap(),
            "--csv",
            csv_path.to_str().unwrap(),
        ])
        .stdout()
        .contains("** Emplazamiento: Barnwell")
        .unwrap();

    let json = fs::read_to_string(&json_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["site"], "Barnwell");
    assert_eq!(value["daily"]["chp_thermal"], 636.975);
    assert_eq!(value["monthly"].as_array().unwrap().len(), 12);

    let csv = fs::read_to_string(&csv_path).unwrap();
    let lines = csv.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "month,heating,chp,hp,boiler");
    assert_eq!(lines[1], "Jan,55498.12,19746.23,16740.00,19011.90");

    fs::remove_file(&json_path).unwrap();
    fs::remove_file(&csv_path).unwrap();
}

#[test]
fn unwritable_output_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell", "--json", "/nonexistent/x.json"])
        .fails_with(73)
        .stderr()
        .contains("No se ha podido crear el archivo /nonexistent/x.json")
        .unwrap();
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell", "--csv", "/nonexistent/x.csv"])
        .fails_with(73)
        .unwrap();
}

#[test]
fn shows_license() {
    assert_cli::Assert::main_binary()
        .with_args(&["-L"])
        .stdout()
        .contains("Copyright (c) 2024  Prepay Power energy team")
        .stdout()
        .contains("Permission is hereby granted, free of charge")
        .unwrap();
}

#[test]
fn verbosity_levels() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell", "-v"])
        .stderr()
        .contains("Emplazamiento: Barnwell")
        .unwrap();
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell", "-vv"])
        .stderr()
        .contains("computed site balance")
        .unwrap();
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "Barnwell"])
        .stderr()
        .doesnt_contain("Emplazamiento: Barnwell")
        .unwrap();
}
