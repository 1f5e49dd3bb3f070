use account_model::Choice;

use super::{DEMOGRAPHICS, EMBOLIC_EVENT, Reshape, push_follow_up_groups};

const INDICATION: &[Choice] = &[
    Choice::new("INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_1", "DVT"),
    Choice::new("INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_2", "PE"),
    Choice::new("INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_3", "Afib/flutter"),
    Choice::new("INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_4", "Heart Valve"),
    Choice::new("INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_5", "Cardiomyopathy/LV Dilation"),
    Choice::new("INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_6", "Stroke"),
    Choice::new("INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_7", "Post-Orthopedic"),
    Choice::new("INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_8", "Other"),
    Choice::new("INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_MD", "MD"),
];

const THERAPY: &[&str] = &[
    "APPROXIMATE_TIME_ON_THERAPY_AT_ENROLLMENT",
    "CESSATION_OF_THERAPY_COMPLIANCE",
    "TARGET_INR",
    "ESTIMATED_TARGET_INR_IF_TARGET_NOT_KNOWN",
    "STABLE_DOSE_REACHED",
    "WARFARIN_DOSE_MG_WEEK",
    "INR_ON_REPORTED_THERAPEUTIC_DOSE_OF_WARFARIN",
    "DATE_AND_TIME_OF_LAST_DOSE",
    "ASPIRIN",
    "ASPIRIN_DOSE_MG_DAY",
    "ACETAMINOPHEN_OR_PARACETAMOL_TYLENOL",
    "ACETAMINOPHEN_PARACETAMOL_DOSE_MG_DAY",
    "NSAIDS",
    "NSAIDS_DOSE_MG_DAY",
    "CLOPIDOGREL",
    "DIPYRIDAMOLE",
    "AMIODARONE_CORDARONE",
    "ATORVASTATIN_LIPITOR",
    "CERIVASTATIN_BAYCOL",
    "FLUVASTATIN_LESCOL",
    "LOVASTATIN_MEVACOR",
    "PRAVASTATIN_PRAVACHOL",
    "ROSUVASTATIN_CRESTOR",
    "SIMVASTATIN_ZOCOR",
    "ANTI_FUNGAL_AZOLES_INCLUDES_KETOCONAZOLE_FLUCONAZOLE_ITRACONAZOLE_DO_NOT_INCLUDE_OMEPRAZOLE_OR_METRONIDAZOLE",
    "MACROLIDE_ANTIBIOTICS_INCLUDES_ERYTHROMYCIN_AZITHROMYCIN_AND_CLARITHROMYCIN",
    "SULFONAMIDE_ANTIBIOTICS_INCLUDES_SEPTRA_BACTRIM_COTRIM_AND_SULFATRIM",
    "CARBAMAZEPINE_TEGRETOL",
    "PHENYTOIN_DILANTIN",
    "RIFAMPIN_OR_RIFAMPICIN",
    "HERBAL_MEDICATIONS_VITAMINS_SUPPLEMENTS_INCLUDES_GARLIC_GINSENG_DANSHEN_DONQUAI_VITAMINS_ZINC_IRON_MAGNESIUM_ETC",
    "OTHER_MEDICATIONS",
    "COMPLETE",
];

const FOLLOW_UP: &[&str] = &[
    "DURATION_OF_FOLLOW_UP",
    "BLEEDING_ACADEMIC_RESEARCH_CONSORTIUM_BARC_BLEEDING_SCORE",
    "DATE_OF_BLEEDING_EVENT",
    "INR_AT_BLEEDING_EVENT",
    "EMBOLIC_EVENT_CHOICE_0",
    "EMBOLIC_EVENT_CHOICE_1",
    "EMBOLIC_EVENT_CHOICE_2",
    "EMBOLIC_EVENT_CHOICE_3",
    "EMBOLIC_EVENT_CHOICE_4",
    "EMBOLIC_EVENT_CHOICE_5",
    "EMBOLIC_EVENT_CHOICE_MD",
    "DATE_OF_EMBOLIC_EVENT",
    "INR_AT_EMBOLIC_EVENT",
    "EGFR_30_ML_MIN_1_73M_2",
    "EGFR_AT_EMBOLIC_EVENT",
    "PATIENT_DECEASED",
    "DATE_OF_DEATH",
    "DATE_OF_LAST_FOLLOW_UP",
    "COMPLETE",
];

const LABS: &[&str] = &["PLATELET_COUNT", "HEMOGLOBIN_G_DL", "COMPLETE"];

pub(super) const RESHAPE: Reshape = Reshape {
    checkboxes: &[
        ("INDICATION_FOR_WARFARIN_TREATMENT", INDICATION),
        ("EMBOLIC_EVENT", EMBOLIC_EVENT),
    ],
    days_from_enrollment: &[
        ("DATE_OF_BLEEDING_EVENT", "TIME_TO_BLEEDING_EVENT"),
        ("DATE_OF_EMBOLIC_EVENT", "TIME_TO_EMBOLIC_EVENT"),
        ("DATE_OF_DEATH", "TIME_TO_DEATH"),
        ("DATE_OF_LAST_FOLLOW_UP", "DURATION_FOLLOWUP"),
    ],
    recodes: &[],
    binned_age: true,
    hours_between: None,
};

// The warfarin extract is laid out like the other two: demographics and
// indication, therapy, five follow-up groups, then labs.
pub(super) fn schema_keys() -> Vec<&'static str> {
    let mut keys = DEMOGRAPHICS.to_vec();
    keys.extend(INDICATION.iter().map(|choice| choice.field));
    keys.extend_from_slice(&["VALVE_REPLACEMENT", "COMPLETE"]);
    keys.extend_from_slice(THERAPY);
    push_follow_up_groups(&mut keys, FOLLOW_UP);
    keys.extend_from_slice(LABS);
    keys
}
