use dimcalc_dimensions::{superscript, DimensionVector, QuantityTable};

#[test]
fn mass_times_acceleration_is_force() {
    let v = dimcalc_dimensions::evaluate_expression("MASS*ACCELERATION").unwrap();
    assert_eq!(v, "M¹L¹T⁻²");
    assert_eq!(
        DimensionVector::parse(&v),
        QuantityTable::builtin().dimensions("FORCE").unwrap()
    );
}

#[test]
fn force_over_area_is_pressure() {
    let v = dimcalc_dimensions::evaluate_expression("FORCE/AREA").unwrap();
    assert_eq!(v, "M¹L⁻¹T⁻²");
}

#[test]
fn energy_over_time_is_power() {
    let v = dimcalc_dimensions::evaluate_expression("ENERGY/TIME").unwrap();
    assert_eq!(v, "M¹L²T⁻³");
}

#[test]
fn trailing_operator_is_malformed() {
    let err = dimcalc_dimensions::evaluate_expression("FORCE*").unwrap_err();
    assert!(matches!(err, dimcalc_dimensions::Error::MalformedExpression));
}

#[test]
fn unrecognized_operator_is_part_of_the_term() {
    let err = dimcalc_dimensions::evaluate_expression("MASS#ACCELERATION").unwrap_err();
    assert_eq!(
        err,
        dimcalc_dimensions::Error::UnknownQuantity("MASS#ACCELERATION".into())
    );
}

#[test]
fn unknown_lowercase_term_is_reported_uppercased() {
    let err = dimcalc_dimensions::evaluate_expression("torque").unwrap_err();
    assert_eq!(
        err,
        dimcalc_dimensions::Error::UnknownQuantity("TORQUE".into())
    );
    assert_eq!(err.to_string(), "'TORQUE' not found in the quantity table");
}

#[test]
fn empty_and_blank_input() {
    assert_eq!(
        dimcalc_dimensions::evaluate_expression(""),
        Err(dimcalc_dimensions::Error::MalformedExpression)
    );
    assert_eq!(
        dimcalc_dimensions::evaluate_expression("   "),
        Err(dimcalc_dimensions::Error::UnknownQuantity(String::new()))
    );
}

#[test]
fn electrical_quantities() {
    // V = I * R
    let v = dimcalc_dimensions::evaluate_expression("current * resistance").unwrap();
    assert_eq!(v, QuantityTable::builtin().dimensions("POTENTIAL").unwrap().format());
    // Q = I * t
    let v = dimcalc_dimensions::evaluate_expression("CURRENT*TIME").unwrap();
    assert_eq!(v, "T¹I¹");
}

#[test]
fn table_formulas_round_trip() {
    let table = QuantityTable::builtin();
    for (name, formula) in table.entries() {
        let v = DimensionVector::parse(formula);
        assert_eq!(v.exponents().len(), 7);
        assert_eq!(
            DimensionVector::parse(&v.format()),
            v,
            "round trip failed for {}",
            name
        );
    }
}

#[test]
fn codec_inverse_small_range() {
    for n in -10..=10 {
        assert_eq!(superscript::decode(superscript::encode(n).chars()), n);
    }
}

#[cfg(feature = "serde")]
#[test]
fn evaluation_serializes_to_json() {
    let table = QuantityTable::builtin();
    let eval = dimcalc_dimensions::Evaluator::new(&table)
        .evaluate("FORCE/AREA")
        .unwrap();
    let json = serde_json::to_value(&eval).unwrap();
    assert_eq!(json["formula"], "M¹L⁻¹T⁻²");
    assert_eq!(json["dimensions"], serde_json::json!([1, -1, -2, 0, 0, 0, 0]));
    assert_eq!(json["matches"], serde_json::json!(["PRESSURE"]));
}
