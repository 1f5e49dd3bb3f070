use account_model::{Choice, OutputColumn};

use super::{DEMOGRAPHICS, EMBOLIC_EVENT, Reshape, push_follow_up_groups};

const INDICATION: &[Choice] = &[
    Choice::new("INDICATION_FOR_NOAC_TREATMENT_CHOICE_1", "DVT"),
    Choice::new("INDICATION_FOR_NOAC_TREATMENT_CHOICE_2", "PE"),
    Choice::new("INDICATION_FOR_NOAC_TREATMENT_CHOICE_3", "DVT/PE"),
    Choice::new("INDICATION_FOR_NOAC_TREATMENT_CHOICE_4", "Atrial Fiberlation"),
    Choice::new("INDICATION_FOR_NOAC_TREATMENT_CHOICE_5", "Other"),
    Choice::new("INDICATION_FOR_NOAC_TREATMENT_CHOICE_MD", "MD"),
];

const DRUG_USED: &[Choice] = &[
    Choice::new("WHICH_NOAC_DRUG_USED_CHOICE_1", "apixaban"),
    Choice::new("WHICH_NOAC_DRUG_USED_CHOICE_2", "rivaroxaban"),
    Choice::new("WHICH_NOAC_DRUG_USED_CHOICE_3", "edoxaban"),
    Choice::new("WHICH_NOAC_DRUG_USED_CHOICE_4", "dabigatran"),
];

const DOSING: &[&str] = &[
    "THERAPEUTIC_DOSE_MG_DAY",
    "APPROXIMATE_TIME_ON_THERAPY_AT_ENROLLMENT",
    "DATE_OF_LAST_DOSE",
    "TIME_OF_LAST_DOSE",
    "DATE_OF_BLOOD_DRAW",
    "TIME_OF_BLOOD_DRAW",
    "LIST_OF_ACTIVE_MEDICATIONS_RX_AND_OTC",
    "ASPIRIN",
    "ASPIRIN_DAILY_DOSE_MG_DAY",
    "ASPIRIN_PRN_DOSE_MG_DAY",
    "ACETAMINOPHEN_OR_PARACETAMOL_TYLENOL",
    "ACETAMINOPHEN_PARACETAMOL_DAILY_DOSE_MG_DAY",
    "ACETAMINOPHEN_PARACETAMOL_PRN_DOSE_MG_DAY",
    "NSAIDS",
    "NSAIDS_DAILY_DOSE_MG_DAY",
    "NSAIDS_PRN_DOSE_MG_DAY",
    "NSAID_NAMES",
    "COMPLETE",
];

const FOLLOW_UP: &[&str] = &[
    "DURATION_OF_FOLLOW_UP",
    "BLEEDING_ACADEMIC_RESEARCH_CONSORTIUM_BARC_BLEEDING_SCORE",
    "DATE_OF_BLEEDING_EVENT",
    "EMBOLIC_EVENT_CHOICE_0",
    "EMBOLIC_EVENT_CHOICE_1",
    "EMBOLIC_EVENT_CHOICE_2",
    "EMBOLIC_EVENT_CHOICE_3",
    "EMBOLIC_EVENT_CHOICE_4",
    "EMBOLIC_EVENT_CHOICE_5",
    "EMBOLIC_EVENT_CHOICE_MD",
    "DATE_OF_EMBOLIC_EVENT",
    "PATIENT_DECEASED",
    "DATE_OF_DEATH",
    "DATE_OF_LAST_FOLLOW_UP",
    "COMPLETE",
];

const LABS: &[&str] = &[
    "PLATELET_COUNT",
    "CREATININE_CLEARANCE_CRCL",
    "HEMATOCRIT",
    "HEMOGLOBIN_G_DL",
    "DILUTED_T_TIME_MEASUREMENT_DABIGATRAN_SECS",
    "ANTI_FACTOR_XA_ACTIVITY_NG_ML",
    "COMPLETE",
];

pub(super) const RESHAPE: Reshape = Reshape {
    checkboxes: &[
        ("INDICATION_FOR_NOAC_TREATMENT", INDICATION),
        ("WHICH_NOAC_DRUG_USED", DRUG_USED),
        ("EMBOLIC_EVENT", EMBOLIC_EVENT),
    ],
    days_from_enrollment: &[
        ("DATE_OF_BLEEDING_EVENT", "TIME_TO_BLEEDING_EVENT"),
        ("DATE_OF_EMBOLIC_EVENT", "TIME_TO_EMBOLIC_EVENT"),
        ("DATE_OF_DEATH", "TIME_TO_DEATH"),
        ("DATE_OF_LAST_FOLLOW_UP", "DURATION_FOLLOWUP"),
    ],
    recodes: &[],
    binned_age: false,
    hours_between: Some((
        "TIME_OF_BLOOD_DRAW",
        OutputColumn::HoursBetween {
            output: "TIME_TO_BLOOD_DRAW",
            from_date: "DATE_OF_LAST_DOSE",
            from_time: "TIME_OF_LAST_DOSE",
            to_date: "DATE_OF_BLOOD_DRAW",
            to_time: "TIME_OF_BLOOD_DRAW",
        },
    )),
};

pub(super) fn schema_keys() -> Vec<&'static str> {
    let mut keys = DEMOGRAPHICS.to_vec();
    keys.extend(INDICATION.iter().map(|choice| choice.field));
    keys.push("COMPLETE");
    keys.extend(DRUG_USED.iter().map(|choice| choice.field));
    keys.extend_from_slice(DOSING);
    push_follow_up_groups(&mut keys, FOLLOW_UP);
    keys.extend_from_slice(LABS);
    keys
}
