use crate::BreedInfo;

use googletest::prelude::*;

fn model_json(confidence: f64, image_url: Option<&str>) -> String {
    let mut value = serde_json::json!({
        "breedName": "Gir",
        "description": "Hardy dairy breed",
        "origin": "Gujarat",
        "characteristics": ["Domed forehead", "Long pendulous ears", "Red coat"],
        "temperament": "Docile",
        "milkYield": "10-12 L/day",
        "draughtCapacity": "Moderate",
        "lifespan": "12-15 years",
        "dietaryNeeds": "Green fodder and dry roughage",
        "commonDiseases": ["FMD", "Mastitis"],
        "confidenceScore": confidence,
        "confidenceReasoning": "Distinctive forehead"
    });
    if let Some(url) = image_url {
        value["imageUrl"] = serde_json::Value::String(url.to_string());
    }
    value.to_string()
}

#[test]
fn given_complete_model_output_when_parsed_then_fields_preserved() {
    let info = BreedInfo::from_model_json(&model_json(87.5, None)).unwrap();

    assert_that!(info.breed_name.as_str(), eq("Gir"));
    assert_that!(info.characteristics.len(), eq(3));
    assert_eq!(info.common_diseases, vec!["FMD", "Mastitis"]);
    assert_that!(info.confidence_score, eq(87.5));
}

#[test]
fn given_missing_image_url_when_parsed_then_placeholder_filled() {
    let info = BreedInfo::from_model_json(&model_json(50.0, None)).unwrap();

    assert_that!(
        info.image_url.as_str(),
        eq("https://ui-avatars.com/api/?name=G&background=random&size=256")
    );
}

#[test]
fn given_image_url_when_parsed_then_kept() {
    let info =
        BreedInfo::from_model_json(&model_json(50.0, Some("https://example.com/gir.png"))).unwrap();

    assert_that!(info.image_url.as_str(), eq("https://example.com/gir.png"));
}

#[test]
fn given_out_of_range_confidence_when_parsed_then_clamped() {
    let high = BreedInfo::from_model_json(&model_json(140.0, None)).unwrap();
    let low = BreedInfo::from_model_json(&model_json(-3.0, None)).unwrap();

    assert_that!(high.confidence_score, eq(100.0));
    assert_that!(low.confidence_score, eq(0.0));
}

#[test]
fn given_empty_text_when_parsed_then_error() {
    assert_that!(BreedInfo::from_model_json("   "), err(anything()));
}

#[test]
fn given_missing_required_field_when_parsed_then_error() {
    let result = BreedInfo::from_model_json(r#"{"breedName":"Gir"}"#);

    assert_that!(result, err(anything()));
}
