use account_model::{
    Choice, FieldCatalog, FieldDef, FormatRule, OutputColumn, OutputSpec, Schema, SiteKeyMap,
    TreatmentArm,
};
use account_standards::{Descriptions, load_arm, load_default_catalog};
use account_transform::{RowTransformer, TransformError};

static FIELDS: &[FieldDef] = &[
    FieldDef::new("STUDY_ID_PHARMGKB_ID", "Study ID", FormatRule::StudyId),
    FieldDef::new("PROJECT_SITE", "Project site", FormatRule::FreeText),
    FieldDef::new("ENROLLMENT_DATE", "Enrollment date", FormatRule::Date),
    FieldDef::new("AGE_AT_ENROLLMENT", "Age at enrollment", FormatRule::Decimal),
    FieldDef::new("BINNED_AGE", "Binned age", FormatRule::FreeText),
    FieldDef::new("DATE_OF_DEATH", "Date of Death", FormatRule::Date),
    FieldDef::new("TIME_TO_DEATH", "Time to death (in days)", FormatRule::FreeText),
    FieldDef::new("STROKE", "Stroke", FormatRule::Checked),
    FieldDef::new("DVT", "DVT", FormatRule::Checked),
    FieldDef::new("EMBOLIC_EVENT", "Embolic event", FormatRule::FreeText),
    FieldDef::new("CARDIAC_DEATH", "Cardiac death", FormatRule::FreeText),
];

const EMBOLIC: &[Choice] = &[Choice::new("STROKE", "Stroke"), Choice::new("DVT", "DVT")];

const KEYS: &[&str] = &[
    "STUDY_ID_PHARMGKB_ID",
    "PROJECT_SITE",
    "ENROLLMENT_DATE",
    "AGE_AT_ENROLLMENT",
    "DATE_OF_DEATH",
    "STROKE",
    "DVT",
    "DATE_OF_DEATH",
    "STROKE",
    "DVT",
    "CARDIAC_DEATH",
];

fn output() -> OutputSpec {
    OutputSpec::new(vec![
        OutputColumn::Field("STUDY_ID_PHARMGKB_ID"),
        OutputColumn::SiteCode,
        OutputColumn::Field("AGE_AT_ENROLLMENT"),
        OutputColumn::BinnedAge {
            output: "BINNED_AGE",
            source: "AGE_AT_ENROLLMENT",
        },
        OutputColumn::Field("DATE_OF_DEATH"),
        OutputColumn::DaysFromEnrollment {
            output: "TIME_TO_DEATH",
            source: "DATE_OF_DEATH",
        },
        OutputColumn::Checkboxes {
            output: "EMBOLIC_EVENT",
            choices: EMBOLIC,
        },
        OutputColumn::Field("DATE_OF_DEATH"),
        OutputColumn::DaysFromEnrollment {
            output: "TIME_TO_DEATH",
            source: "DATE_OF_DEATH",
        },
        OutputColumn::Checkboxes {
            output: "EMBOLIC_EVENT",
            choices: EMBOLIC,
        },
        OutputColumn::Recode {
            output: "CARDIAC_DEATH",
            source: "CARDIAC_DEATH",
            codes: &[("1", "Y"), ("0", "N"), ("MD", "MD")],
        },
    ])
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|cell| (*cell).to_string()).collect()
}

fn site_keys() -> SiteKeyMap {
    [("NU", "1"), ("UIC", "2")].into_iter().collect()
}

#[test]
fn reshapes_repeating_groups_by_occurrence() {
    let catalog = FieldCatalog::new(FIELDS).expect("catalog");
    let schema = Schema::from_keys("test", &catalog, KEYS).expect("schema");
    let output = output();
    let sites = site_keys();
    let transformer =
        RowTransformer::new(&schema, &output, &catalog, Some(&sites)).expect("transformer");

    let cells = transformer
        .build_output_row(
            &row(&[
                "PA1", " NU ", "1/2/2019", "93", "1/12/2019", "Unchecked", "Checked", "",
                "Checked", "Checked", "1",
            ]),
            2,
        )
        .expect("output row");
    assert_eq!(
        cells,
        vec![
            "PA1",
            "1",
            "93",
            "90 and over",
            "1/12/2019",
            "10",
            "DVT",
            "MD",
            "MD",
            "Stroke; DVT",
            "Y"
        ]
    );
}

#[test]
fn header_rows_follow_output_columns() {
    let catalog = FieldCatalog::new(FIELDS).expect("catalog");
    let schema = Schema::from_keys("test", &catalog, KEYS).expect("schema");
    let output = output();
    let transformer = RowTransformer::new(&schema, &output, &catalog, None).expect("transformer");

    let header = transformer.header();
    assert_eq!(header[1], "Project site");
    assert_eq!(header[3], "Binned age");
    let descriptions = transformer.descriptions(&Descriptions::default());
    assert_eq!(descriptions.len(), output.len());
    assert_eq!(descriptions[0], "");
    assert_eq!(descriptions[5], "Days from enrollment to death");
}

#[test]
fn computed_cells_fall_back_to_missing_data() {
    let catalog = FieldCatalog::new(FIELDS).expect("catalog");
    let schema = Schema::from_keys("test", &catalog, KEYS).expect("schema");
    let output = output();
    let transformer = RowTransformer::new(&schema, &output, &catalog, None).expect("transformer");

    let cells = transformer
        .build_output_row(
            &row(&["PA2", "GWU", "MD", "sixty", "12/30/2018", "", "", "", "", "", "7"]),
            3,
        )
        .expect("output row");
    assert_eq!(cells[1], "GWU");
    assert_eq!(cells[3], "BAD VALUE");
    assert_eq!(cells[5], "MD");
    assert_eq!(cells[6], "MD");
    assert_eq!(cells[10], "MD");
}

#[test]
fn negative_day_differences_are_kept() {
    let catalog = FieldCatalog::new(FIELDS).expect("catalog");
    let schema = Schema::from_keys("test", &catalog, KEYS).expect("schema");
    let output = output();
    let transformer = RowTransformer::new(&schema, &output, &catalog, None).expect("transformer");

    let cells = transformer
        .build_output_row(
            &row(&["PA3", "NU", "2019-01-10", "40", "1/8/2019", "", "", "", "", "", "0"]),
            2,
        )
        .expect("output row");
    assert_eq!(cells[5], "-2");
    assert_eq!(cells[10], "N");
}

#[test]
fn short_rows_publish_missing_data() {
    let catalog = FieldCatalog::new(FIELDS).expect("catalog");
    let schema = Schema::from_keys("test", &catalog, KEYS).expect("schema");
    let output = output();
    let transformer = RowTransformer::new(&schema, &output, &catalog, None).expect("transformer");

    let cells = transformer
        .build_output_row(&row(&["PA4", "UIC", "1/2/2019"]), 4)
        .expect("output row");
    assert_eq!(cells.len(), output.len());
    assert!(cells[2..].iter().all(|cell| cell == "MD"));
}

#[test]
fn unmapped_site_is_fatal() {
    let catalog = FieldCatalog::new(FIELDS).expect("catalog");
    let schema = Schema::from_keys("test", &catalog, KEYS).expect("schema");
    let output = output();
    let sites = site_keys();
    let transformer =
        RowTransformer::new(&schema, &output, &catalog, Some(&sites)).expect("transformer");

    let rows = vec![
        row(&["PA1", "NU", "", "", "", "", "", "", "", "", ""]),
        row(&["PA2", "Stanford", "", "", "", "", "", "", "", "", ""]),
    ];
    let error = transformer.build_output_rows(&rows).expect_err("unmapped site");
    match error {
        TransformError::UnmappedSite { site, row } => {
            assert_eq!(site, "Stanford");
            assert_eq!(row, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn output_reading_outside_the_schema_is_rejected() {
    let catalog = FieldCatalog::new(FIELDS).expect("catalog");
    let schema = Schema::from_keys("test", &catalog, &["STUDY_ID_PHARMGKB_ID", "PROJECT_SITE"])
        .expect("schema");
    let output = output();
    let error = RowTransformer::new(&schema, &output, &catalog, None)
        .err()
        .expect("layout error");
    insta::assert_snapshot!(
        error.to_string(),
        @"output column reads AGE_AT_ENROLLMENT, which is not part of the test schema"
    );
}

#[test]
fn noac_row_computes_hours_to_blood_draw() {
    let catalog = load_default_catalog().expect("catalog");
    let standard = load_arm(TreatmentArm::Noac, &catalog).expect("noac");
    let schema = &standard.schema;
    let mut cells = vec!["MD".to_string(); schema.len()];
    let mut set = |key: &str, value: &str| {
        let index = schema.column_of(key, 0).expect("column");
        cells[index] = value.to_string();
    };
    set("STUDY_ID_PHARMGKB_ID", "PA10");
    set("PROJECT_SITE", "UIC");
    set("DATE_OF_LAST_DOSE", "01/2/2019");
    set("TIME_OF_LAST_DOSE", "2:00 pm");
    set("DATE_OF_BLOOD_DRAW", "01/2/2019");
    set("TIME_OF_BLOOD_DRAW", "4:38 PM");

    let sites = site_keys();
    let transformer =
        RowTransformer::new(schema, &standard.output, &catalog, Some(&sites)).expect("transformer");
    let output = transformer.build_output_row(&cells, 2).expect("output row");
    assert_eq!(output.len(), 114);
    assert_eq!(output[1], "2");
    assert_eq!(output[28], "2.63");
    assert_eq!(output[19], "MD");
}

#[test]
fn unparsable_draw_time_leaves_hours_missing() {
    let catalog = load_default_catalog().expect("catalog");
    let standard = load_arm(TreatmentArm::Noac, &catalog).expect("noac");
    let schema = &standard.schema;
    let mut cells = vec!["MD".to_string(); schema.len()];
    for (key, value) in [
        ("DATE_OF_LAST_DOSE", "1/2/2019"),
        ("TIME_OF_LAST_DOSE", "14:00"),
        ("DATE_OF_BLOOD_DRAW", "1/2/2019"),
        ("TIME_OF_BLOOD_DRAW", "4:38 pm"),
    ] {
        let index = schema.column_of(key, 0).expect("column");
        cells[index] = value.to_string();
    }

    let transformer =
        RowTransformer::new(schema, &standard.output, &catalog, None).expect("transformer");
    let output = transformer.build_output_row(&cells, 2).expect("output row");
    assert_eq!(output[28], "MD");
}
