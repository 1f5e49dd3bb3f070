use account_model::Choice;

use super::{DEMOGRAPHICS, Reshape, push_follow_up_groups};

const INDICATION: &[Choice] = &[
    Choice::new("INDICATION_FOR_CLOPIDOGREL_TREATMENT_CHOICE_1", "Coronary artery disease"),
    Choice::new("INDICATION_FOR_CLOPIDOGREL_TREATMENT_CHOICE_2", "Peripheral arterial disease"),
    Choice::new("INDICATION_FOR_CLOPIDOGREL_TREATMENT_CHOICE_3", "Ischemic stroke"),
    Choice::new("INDICATION_FOR_CLOPIDOGREL_TREATMENT_CHOICE_4", "Acute cornary syndrome"),
    Choice::new("INDICATION_FOR_CLOPIDOGREL_TREATMENT_CHOICE_5", "Other"),
];

const PCI_HISTORY: &[&str] = &[
    "INDICATION_FOR_PCI",
    "PRIOR_PCI",
    "CARDIOGENIC_SHOCK_AT_TIME_OF_PCI",
    "PRIOR_MI",
    "PRIOR_CORONARY_ARTERY_BYPASS_GRAFTING_CABG",
    "PRIOR_ANGIOPLASTY",
    "VESSEL_DISEASE_50_STENOSIS",
    "COMPLETE",
];

const MEDICATIONS: &[&str] = &[
    "CLOPIDOGREL_DOSE_MG_DAY",
    "APPROXIMATE_TIME_ON_THERAPY_AT_ENROLLMENT",
    "CESSATION_OF_THERAPY_COMPLIANCE",
    "ASPIRIN",
    "ASPIRIN_DAILY_DOSE_MG_DAY",
    "ASPIRIN_PRN_DOSE_MG_DAY",
    "ACETAMINOPHEN_OR_PARACETAMOL_TYLENOL",
    "ACETAMINOPHEN_PARACETAMOL_DAILY_DOSE_MG_DAY",
    "ACETAMINOPHEN_PARACETAMOL_PRN_DOSE_MG_DAY",
    "NSAIDS",
    "NSAIDS_DAILY_DOSE_MG_DAY",
    "NSAIDS_PRN_DOSE_MG_DAY",
    "PROTON_PUMP_INHIBITORS_PPIS",
    "PROTON_PUMP_INHIBITORS_PPIS_NAMES",
    "STATINS",
    "GPIIB_IIIA",
    "WARFARIN",
    "SSRIS",
    "SNRIS",
    "FLUCONAZOLE",
    "VORICONAZOLE",
    "RIFAMPIN",
    "RITONAVIR",
    "EFAVIRENZ",
    "PHENYTOIN",
    "BARBITURATES",
    "HERBAL_MEDICATIONS_VITAMINS_SUPPLEMENTS_INCLUDES_GARLIC_GINSENG_DANSHEN_DONG_QUAI_ZINC_IRON_MAGNESIUM_ETC",
    "OTHER_MEDICATIONS",
    "COMPLETE",
];

const FOLLOW_UP: &[&str] = &[
    "DURATION_OF_FOLLOW_UP",
    "BLEEDING_ACADEMIC_RESEARCH_CONSORTIUM_BARC_BLEEDING_SCORE",
    "DATE_OF_BLEEDING_EVENT",
    "MACE",
    "DATE_OF_MACE",
    "STEMI_DURING_FOLLOW_UP",
    "DATE_OF_THE_FIRST_STEMI",
    "NSTEMI_DURING_FOLLOW_UP",
    "DATE_OF_THE_FIRST_NSTEMI",
    "UNSTABLE_ANGINA",
    "DATE_OF_THE_FIRST_UNSTABLE_ANGINA_DURING_FOLLOW_UP",
    "STENT_TYPE",
    "STENT_THROMBOSIS_DURING_FOLLOW_UP",
    "STENT_THROMBOSIS_TIMING",
    "DATE_OF_THROMBOSIS",
    "TYPE_OF_STENT_THROMBOSIS",
    "CARDIAC_DEATH",
    "DATE_OF_CARDIAC_DEATH",
    "MYOCARDIAL_INFARCTION_MI",
    "DATE_OF_THE_FIRST_MI",
    "ACS_DURING_FOLLOW_UP",
    "DATE_OF_THE_FIRST_ACS",
    "ISCHEMIC_STROKE",
    "DATE_OF_ISCHEMIC_STROKE",
    "HEMORRHAGIC_STROKE",
    "DATE_OF_HEMORRHAGIC_STROKE",
    "PATIENT_DECEASED",
    "DATE_OF_DEATH",
    "DATE_OF_LAST_FOLLOW_UP",
    "COMPLETE",
];

const LABS: &[&str] = &[
    "TIME_INTERVAL_BETWEEN_LOADING_DOSE_AND_VERIFYNOW_PLATELET_AGGREGATION_MEASURES",
    "VERIFYNOW_ADP_STIMULATED_AGGREGATION_WHILE_ON_MAINTENANCE_DOSE_OF_CLOPIDOGREL_PRU",
    "VERIFYNOW_ADP_STIMULATED_AGGREGATION_WHILE_ON_MAINTENANCE_DOSE_OF_CLOPIDOGREL_INHIBITION",
    "BUN_MG_DL",
    "CREATININE_LEVEL_MG_DL",
    "BLOOD_CELL_COUNT_OPTIONAL",
    "ABSOLUTE_WHITE_CELL_COUNT_X10_3_CELLS_UL",
    "RED_CELL_COUNT_X10_6_CELLS_UL",
    "PLATELET_COUNT_X10_3_UL",
    "MEAN_PLATELET_VOLUME_FL",
    "HEMATOCRIT",
    "HEMOGLOBIN_G_DL__PRE_CLOPIDOGREL",
    "PLASMA_UREA_MMOL_L",
    "VARIOUS_CHOLESTEROL_MEASUREMENT_TOTAL_LDL_HDL_ETC",
    "LDL_MG_DL",
    "HDL_MG_DL",
    "TOTAL_CHOLESTEROL_MG_DL",
    "TRIGLYCERIDES_MG_DL",
    "ABSOLUTE_WHITE_CELL_COUNT_X10_3_CELLS_UL_ON_PLAVIX",
    "RED_CELL_COUNT_X10_6_CELLS_UL_ON_PLAVIX",
    "PLATELET_COUNT_X10_3_UL_ON_PLAVIX",
    "MEAN_PLATELET_VOLUME_FL_ON_PLAVIX",
    "HEMATOCRIT_ON_PLAVIX",
    "HEMOGLOBIN_G_DL_ON_PLAVIX",
    "COMPLETE",
];

const CARDIAC_DEATH_CODES: &[(&str, &str)] = &[("1", "Y"), ("0", "N"), ("MD", "MD")];

pub(super) const RESHAPE: Reshape = Reshape {
    checkboxes: &[("INDICATION_FOR_CLOPIDOGREL_TREATMENT", INDICATION)],
    days_from_enrollment: &[
        ("DATE_OF_BLEEDING_EVENT", "TIME_TO_BLEEDING_EVENT"),
        ("DATE_OF_MACE", "TIME_TO_MACE"),
        ("DATE_OF_THE_FIRST_STEMI", "TIME_TO_STEMI"),
        ("DATE_OF_THE_FIRST_NSTEMI", "TIME_TO_NSTEMI"),
        ("DATE_OF_THE_FIRST_UNSTABLE_ANGINA_DURING_FOLLOW_UP", "TIME_TO_ANGINA"),
        ("DATE_OF_THROMBOSIS", "TIME_TO_THROMB"),
        ("DATE_OF_CARDIAC_DEATH", "TIME_TO_CARD_DEATH"),
        ("DATE_OF_THE_FIRST_MI", "TIME_TO_MI"),
        ("DATE_OF_THE_FIRST_ACS", "TIME_TO_ACS"),
        ("DATE_OF_ISCHEMIC_STROKE", "TIME_TO_ISC_STROKE"),
        ("DATE_OF_HEMORRHAGIC_STROKE", "TIME_TO_HEM_STROKE"),
        ("DATE_OF_DEATH", "TIME_TO_DEATH"),
        ("DATE_OF_LAST_FOLLOW_UP", "DURATION_FOLLOWUP"),
    ],
    recodes: &[("CARDIAC_DEATH", CARDIAC_DEATH_CODES)],
    binned_age: true,
    hours_between: None,
};

pub(super) fn schema_keys() -> Vec<&'static str> {
    let mut keys = DEMOGRAPHICS.to_vec();
    keys.extend(INDICATION.iter().map(|choice| choice.field));
    keys.extend_from_slice(PCI_HISTORY);
    keys.extend_from_slice(MEDICATIONS);
    push_follow_up_groups(&mut keys, FOLLOW_UP);
    keys.extend_from_slice(LABS);
    keys
}
