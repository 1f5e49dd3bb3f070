//! The field catalog: every column that appears in an arm file, plus the
//! computed columns of the reshaped outputs.
//!
//! Arm membership per field is noted with block tags: `C1`-`C8` for the
//! clopidogrel file, `N1`-`N8` for NOAC, `W1`-`W8` for warfarin. Blocks 3-7
//! are the repeating follow-up groups.

use account_model::{FieldCatalog, FieldDef, FormatRule as F};

use crate::error::Result;

const SITES: &[&str] = &["NU", "UIC", "UofC", "DCVA", "GWU"];
const COMPLETION: &[&str] = &["Complete", "Incomplete", "Unverified"];
const GENDERS: &[&str] = &["M", "F"];
const CODES_0_TO_4: &[&str] = &["0", "1", "2", "3", "4", "MD"];
const CODES_0_TO_2: &[&str] = &["0", "1", "2", "MD"];
const CODES_1_TO_4: &[&str] = &["1", "2", "3", "4", "MD"];
const CODES_1_TO_3: &[&str] = &["1", "2", "3", "MD"];
const BINARY: &[&str] = &["0", "1", "MD"];
const BARC_SCORES: &[&str] = &[
    "Type 0", "Type 2", "Type 3", "Type 3a", "Type 3b", "Type 3c", "Type 5", "MD",
];
const PPI_CODES: &[&str] = &["Y", "N", "1", "2", "3", "4", "5", "6", "MD"];

pub static FIELDS: &[FieldDef] = &[
    // Demographics (C1, N1, W1)
    FieldDef::new("STUDY_ID_PHARMGKB_ID", "Study ID (PharmGKB ID)", F::StudyId),
    FieldDef::new("PROJECT_SITE", "Project site", F::OneOf(SITES)),
    FieldDef::new("GENDER", "Gender", F::OneOf(GENDERS)),
    FieldDef::new("DATE_OF_BIRTH", "Date of Birth", F::Date),
    FieldDef::new("ENROLLMENT_DATE", "Enrollment date", F::Date),
    FieldDef::new("AGE_AT_ENROLLMENT", "Age at enrollment", F::Integer).at_least(18.0),
    FieldDef::new("HEIGHT_CM", "Height (cm)", F::Decimal).bounded(134.0, 204.0),
    FieldDef::new("WEIGHT_KG", "Weight (kg)", F::Decimal).bounded(34.0, 204.0),
    FieldDef::new("BMI", "BMI", F::Decimal).bounded(15.0, 50.0),
    FieldDef::new("NOTES", "Notes", F::FreeText),
    FieldDef::new("LIST_OF_COMORBIDITIES", "List of comorbidities", F::FreeText),
    FieldDef::new("DIABETES", "Diabetes", F::OneOf(CODES_0_TO_2)),
    FieldDef::new(
        "CONGESTIVE_HEART_FAILURE_AND_OR_CARDIOMYOPATHY",
        "Congestive Heart Failure and/or Cardiomyopathy",
        F::YesNoNa,
    ),
    FieldDef::new("HYPERTENSION", "Hypertension", F::YesNoNa),
    FieldDef::new("HYPERCHOLESTEROLEMIA", "Hypercholesterolemia", F::YesNoNa),
    FieldDef::new("CURRENT_SMOKER", "Current smoker", F::YesNoNa),
    FieldDef::new("FORMER_SMOKER", "Former smoker", F::YesNoNa),
    FieldDef::new("HOW_LONG_A_SMOKER", "How long a smoker?", F::Decimal),
    FieldDef::new("ALCOHOL", "Alcohol", F::OneOf(CODES_0_TO_4)),
    FieldDef::new("COMPLETE", "Complete?", F::OneOf(COMPLETION)),
    // Clopidogrel indication and PCI history (C1)
    FieldDef::new(
        "INDICATION_FOR_CLOPIDOGREL_TREATMENT_CHOICE_1",
        "Indication for Clopidogrel Treatment (choice=1)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_CLOPIDOGREL_TREATMENT_CHOICE_2",
        "Indication for Clopidogrel Treatment (choice=2)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_CLOPIDOGREL_TREATMENT_CHOICE_3",
        "Indication for Clopidogrel Treatment (choice=3)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_CLOPIDOGREL_TREATMENT_CHOICE_4",
        "Indication for Clopidogrel Treatment (choice=4)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_CLOPIDOGREL_TREATMENT_CHOICE_5",
        "Indication for Clopidogrel Treatment (choice=5)",
        F::Checked,
    ),
    FieldDef::new("INDICATION_FOR_PCI", "Indication for PCI", F::OneOf(CODES_1_TO_4)),
    FieldDef::new("PRIOR_PCI", "Prior PCI", F::YesNoNa),
    FieldDef::new(
        "CARDIOGENIC_SHOCK_AT_TIME_OF_PCI",
        "Cardiogenic shock at time of PCI",
        F::YesNoNa,
    ),
    FieldDef::new("PRIOR_MI", "Prior MI", F::YesNoNa),
    FieldDef::new(
        "PRIOR_CORONARY_ARTERY_BYPASS_GRAFTING_CABG",
        "Prior Coronary artery bypass grafting (CABG)",
        F::YesNoNa,
    ),
    FieldDef::new("PRIOR_ANGIOPLASTY", "Prior angioplasty", F::YesNoNa),
    FieldDef::new(
        "VESSEL_DISEASE_50_STENOSIS",
        "Vessel Disease (> 50% stenosis)",
        F::OneOf(CODES_1_TO_4),
    ),
    // NOAC indication and drug (N1, N2)
    FieldDef::new(
        "INDICATION_FOR_NOAC_TREATMENT_CHOICE_1",
        "Indication for NOAC Treatment (choice=1)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_NOAC_TREATMENT_CHOICE_2",
        "Indication for NOAC Treatment (choice=2)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_NOAC_TREATMENT_CHOICE_3",
        "Indication for NOAC Treatment (choice=3)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_NOAC_TREATMENT_CHOICE_4",
        "Indication for NOAC Treatment (choice=4)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_NOAC_TREATMENT_CHOICE_5",
        "Indication for NOAC Treatment (choice=5)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_NOAC_TREATMENT_CHOICE_MD",
        "Indication for NOAC Treatment (choice=MD)",
        F::Checked,
    ),
    FieldDef::new(
        "WHICH_NOAC_DRUG_USED_CHOICE_1",
        "Which NOAC drug used? (choice=1)",
        F::Checked,
    ),
    FieldDef::new(
        "WHICH_NOAC_DRUG_USED_CHOICE_2",
        "Which NOAC drug used? (choice=2)",
        F::Checked,
    ),
    FieldDef::new(
        "WHICH_NOAC_DRUG_USED_CHOICE_3",
        "Which NOAC drug used? (choice=3)",
        F::Checked,
    ),
    FieldDef::new(
        "WHICH_NOAC_DRUG_USED_CHOICE_4",
        "Which NOAC drug used? (choice=4)",
        F::Checked,
    ),
    FieldDef::new("THERAPEUTIC_DOSE_MG_DAY", "Therapeutic dose (mg/day)", F::Decimal),
    FieldDef::new("DATE_OF_LAST_DOSE", "Date of last dose", F::Date),
    FieldDef::new("TIME_OF_LAST_DOSE", "Time of last dose", F::TimeOfDay),
    FieldDef::new("DATE_OF_BLOOD_DRAW", "Date of blood draw", F::Date),
    FieldDef::new("TIME_OF_BLOOD_DRAW", "Time of blood draw", F::TimeOfDay),
    FieldDef::new(
        "LIST_OF_ACTIVE_MEDICATIONS_RX_AND_OTC",
        "List of active medications (RX and OTC)",
        F::FreeText,
    ),
    FieldDef::new("NSAID_NAMES", "NSAID names", F::FreeText),
    // Warfarin indication (W1)
    FieldDef::new(
        "INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_1",
        "Indication for Warfarin Treatment (choice=1)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_2",
        "Indication for Warfarin Treatment (choice=2)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_3",
        "Indication for Warfarin Treatment (choice=3)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_4",
        "Indication for Warfarin Treatment (choice=4)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_5",
        "Indication for Warfarin Treatment (choice=5)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_6",
        "Indication for Warfarin Treatment (choice=6)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_7",
        "Indication for Warfarin Treatment (choice=7)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_8",
        "Indication for Warfarin Treatment (choice=8)",
        F::Checked,
    ),
    FieldDef::new(
        "INDICATION_FOR_WARFARIN_TREATMENT_CHOICE_MD",
        "Indication for Warfarin Treatment (choice=MD)",
        F::Checked,
    ),
    FieldDef::new("VALVE_REPLACEMENT", "Valve Replacement", F::YesNoNa),
    // Therapy and medications (C2, N2, W2)
    FieldDef::new("CLOPIDOGREL_DOSE_MG_DAY", "Clopidogrel dose (mg/day)", F::Integer).exactly(75.0),
    FieldDef::new(
        "APPROXIMATE_TIME_ON_THERAPY_AT_ENROLLMENT",
        "Approximate time on therapy at enrollment",
        F::Days,
    ),
    FieldDef::new(
        "CESSATION_OF_THERAPY_COMPLIANCE",
        "Cessation of therapy (compliance)",
        F::Date,
    ),
    FieldDef::new("TARGET_INR", "Target INR", F::DecimalRange).bounded(1.5, 3.5),
    FieldDef::new(
        "ESTIMATED_TARGET_INR_IF_TARGET_NOT_KNOWN",
        "Estimated Target INR, if target not known",
        F::DecimalRange,
    )
    .bounded(1.5, 3.5),
    FieldDef::new("STABLE_DOSE_REACHED", "Stable dose reached?", F::YesNoNa),
    FieldDef::new("WARFARIN_DOSE_MG_WEEK", "Warfarin dose (mg/week)", F::Decimal).bounded(3.0, 84.0),
    FieldDef::new(
        "INR_ON_REPORTED_THERAPEUTIC_DOSE_OF_WARFARIN",
        "INR on Reported therapeutic dose of warfarin",
        F::Decimal,
    )
    .bounded(1.0, 7.0),
    FieldDef::new(
        "DATE_AND_TIME_OF_LAST_DOSE",
        "Date and time of last dose",
        F::Unvalidated,
    ),
    FieldDef::new("ASPIRIN", "Aspirin", F::YesNoNa),
    FieldDef::new("ASPIRIN_DOSE_MG_DAY", "Aspirin Dose (mg/day)", F::Integer).bounded(81.0, 1500.0),
    FieldDef::new(
        "ASPIRIN_DAILY_DOSE_MG_DAY",
        "Aspirin Daily Dose (mg/day)",
        F::Decimal,
    )
    .bounded(81.0, 1500.0),
    FieldDef::new("ASPIRIN_PRN_DOSE_MG_DAY", "Aspirin PRN Dose (mg/day)", F::Decimal)
        .bounded(81.0, 1500.0),
    FieldDef::new(
        "ACETAMINOPHEN_OR_PARACETAMOL_TYLENOL",
        "Acetaminophen or Paracetamol (Tylenol)",
        F::YesNoNa,
    ),
    FieldDef::new(
        "ACETAMINOPHEN_PARACETAMOL_DOSE_MG_DAY",
        "Acetaminophen/Paracetamol Dose (mg/day)",
        F::Integer,
    )
    .bounded(325.0, 4000.0),
    FieldDef::new(
        "ACETAMINOPHEN_PARACETAMOL_DAILY_DOSE_MG_DAY",
        "Acetaminophen/Paracetamol Daily Dose (mg/day)",
        F::Decimal,
    )
    .bounded(325.0, 4000.0),
    FieldDef::new(
        "ACETAMINOPHEN_PARACETAMOL_PRN_DOSE_MG_DAY",
        "Acetaminophen/Paracetamol PRN Dose (mg/day)",
        F::Decimal,
    )
    .bounded(325.0, 4000.0),
    FieldDef::new("NSAIDS", "NSAIDs", F::YesNoNa),
    FieldDef::new("NSAIDS_DOSE_MG_DAY", "NSAIDs dose (mg/day)", F::Integer).bounded(200.0, 3200.0),
    FieldDef::new("NSAIDS_DAILY_DOSE_MG_DAY", "NSAIDs Daily Dose (mg/day)", F::Decimal)
        .bounded(200.0, 3200.0),
    FieldDef::new("NSAIDS_PRN_DOSE_MG_DAY", "NSAIDs PRN Dose (mg/day)", F::Decimal)
        .bounded(200.0, 3200.0),
    FieldDef::new(
        "PROTON_PUMP_INHIBITORS_PPIS",
        "Proton Pump Inhibitors (PPIs)",
        F::OneOf(PPI_CODES),
    ),
    FieldDef::new(
        "PROTON_PUMP_INHIBITORS_PPIS_NAMES",
        "Proton Pump Inhibitors (PPIs)",
        F::FreeText,
    ),
    FieldDef::new("STATINS", "Statins", F::YesNoNa),
    FieldDef::new("GPIIB_IIIA", "GpIIb/IIIa", F::YesNoNa),
    FieldDef::new("WARFARIN", "Warfarin", F::YesNoNa),
    FieldDef::new("CLOPIDOGREL", "Clopidogrel", F::YesNoNa),
    FieldDef::new("DIPYRIDAMOLE", "Dipyridamole", F::YesNoNa),
    FieldDef::new("AMIODARONE_CORDARONE", "Amiodarone (Cordarone)", F::YesNoNa),
    FieldDef::new("ATORVASTATIN_LIPITOR", "Atorvastatin (Lipitor)", F::YesNoNa),
    FieldDef::new("CERIVASTATIN_BAYCOL", "Cerivastatin (Baycol)", F::YesNoNa),
    FieldDef::new("FLUVASTATIN_LESCOL", "Fluvastatin (Lescol)", F::YesNoNa),
    FieldDef::new("LOVASTATIN_MEVACOR", "Lovastatin (Mevacor)", F::YesNoNa),
    FieldDef::new("PRAVASTATIN_PRAVACHOL", "Pravastatin (Pravachol)", F::YesNoNa),
    FieldDef::new("ROSUVASTATIN_CRESTOR", "Rosuvastatin (Crestor)", F::YesNoNa),
    FieldDef::new("SIMVASTATIN_ZOCOR", "Simvastatin (Zocor)", F::YesNoNa),
    FieldDef::new(
        "ANTI_FUNGAL_AZOLES_INCLUDES_KETOCONAZOLE_FLUCONAZOLE_ITRACONAZOLE_DO_NOT_INCLUDE_OMEPRAZOLE_OR_METRONIDAZOLE",
        "Anti-fungal Azoles (includes ketoconazole, fluconazole, itraconazole; do not include omeprazole or metronidazole)",
        F::YesNoNa,
    ),
    FieldDef::new(
        "MACROLIDE_ANTIBIOTICS_INCLUDES_ERYTHROMYCIN_AZITHROMYCIN_AND_CLARITHROMYCIN",
        "Macrolide Antibiotics (includes erythromycin, azithromycin, and clarithromycin)",
        F::YesNoNa,
    ),
    FieldDef::new(
        "SULFONAMIDE_ANTIBIOTICS_INCLUDES_SEPTRA_BACTRIM_COTRIM_AND_SULFATRIM",
        "Sulfonamide Antibiotics (includes Septra, Bactrim, Cotrim and Sulfatrim)",
        F::YesNoNa,
    ),
    FieldDef::new("CARBAMAZEPINE_TEGRETOL", "Carbamazepine (Tegretol)", F::YesNoNa),
    FieldDef::new("SSRIS", "SSRIs", F::YesNoNa),
    FieldDef::new("SNRIS", "SNRIs", F::YesNoNa),
    FieldDef::new("FLUCONAZOLE", "Fluconazole", F::YesNoNa),
    FieldDef::new("VORICONAZOLE", "Voriconazole", F::YesNoNa),
    FieldDef::new("RIFAMPIN", "Rifampin", F::YesNoNa),
    FieldDef::new("RIFAMPIN_OR_RIFAMPICIN", "Rifampin or Rifampicin", F::YesNoNa),
    FieldDef::new("RITONAVIR", "Ritonavir", F::YesNoNa),
    FieldDef::new("EFAVIRENZ", "Efavirenz", F::YesNoNa),
    FieldDef::new("PHENYTOIN", "Phenytoin", F::YesNoNa),
    FieldDef::new("PHENYTOIN_DILANTIN", "Phenytoin (Dilantin)", F::YesNoNa),
    FieldDef::new("BARBITURATES", "Barbiturates", F::YesNoNa),
    FieldDef::new(
        "HERBAL_MEDICATIONS_VITAMINS_SUPPLEMENTS_INCLUDES_GARLIC_GINSENG_DANSHEN_DONG_QUAI_ZINC_IRON_MAGNESIUM_ETC",
        "Herbal Medications, Vitamins, Supplements (includes garlic, ginseng, danshen, dong quai, zinc, iron, magnesium, etc)",
        F::YesNoNa,
    ),
    FieldDef::new(
        "HERBAL_MEDICATIONS_VITAMINS_SUPPLEMENTS_INCLUDES_GARLIC_GINSENG_DANSHEN_DONQUAI_VITAMINS_ZINC_IRON_MAGNESIUM_ETC",
        "Herbal Medications, Vitamins, Supplements (includes garlic, ginseng, danshen, donquai, vitamins, zinc, iron, magnesium, etc)",
        F::YesNoNa,
    ),
    FieldDef::new("OTHER_MEDICATIONS", "Other medications", F::FreeText),
    // Follow-up groups (C3-C7, N3-N7, W3-W7)
    FieldDef::new("DURATION_OF_FOLLOW_UP", "Duration of follow up", F::Days),
    FieldDef::new("PATIENT_LOST_TO_FOLLOW_UP", "Patient lost to follow up?", F::YesNoNa),
    FieldDef::new(
        "BLEEDING_ACADEMIC_RESEARCH_CONSORTIUM_BARC_BLEEDING_SCORE",
        "Bleeding Academic Research Consortium (BARC) bleeding score",
        F::OneOf(BARC_SCORES),
    ),
    FieldDef::new("DATE_OF_BLEEDING_EVENT", "Date of bleeding event", F::Date),
    FieldDef::new("INR_AT_BLEEDING_EVENT", "INR at bleeding event", F::Decimal).bounded(1.0, 7.0),
    FieldDef::new("MACE", "MACE", F::YesNoNa),
    FieldDef::new("DATE_OF_MACE", "Date of MACE", F::Date),
    FieldDef::new("STEMI_DURING_FOLLOW_UP", "STEMI during follow up", F::YesNoNa),
    FieldDef::new("DATE_OF_THE_FIRST_STEMI", "Date of the first STEMI", F::Date),
    FieldDef::new("NSTEMI_DURING_FOLLOW_UP", "NSTEMI during follow up", F::YesNoNa),
    FieldDef::new("DATE_OF_THE_FIRST_NSTEMI", "Date of the first NSTEMI", F::Date),
    FieldDef::new("UNSTABLE_ANGINA", "Unstable angina", F::YesNoNa),
    FieldDef::new(
        "DATE_OF_THE_FIRST_UNSTABLE_ANGINA_DURING_FOLLOW_UP",
        "Date of the first unstable angina during follow up",
        F::Date,
    ),
    FieldDef::new("STENT_TYPE", "Stent type", F::OneOf(CODES_1_TO_3)),
    FieldDef::new(
        "STENT_THROMBOSIS_DURING_FOLLOW_UP",
        "Stent Thrombosis during follow up",
        F::YesNoNa,
    ),
    FieldDef::new("STENT_THROMBOSIS_TIMING", "Stent Thrombosis timing", F::Integer),
    FieldDef::new("DATE_OF_THROMBOSIS", "Date of thrombosis", F::Date),
    FieldDef::new(
        "TYPE_OF_STENT_THROMBOSIS",
        "Type of stent thrombosis",
        F::OneOf(CODES_1_TO_3),
    ),
    FieldDef::new("CARDIAC_DEATH", "Cardiac death", F::OneOf(BINARY)),
    FieldDef::new("DATE_OF_CARDIAC_DEATH", "Date of cardiac death", F::Date),
    FieldDef::new("MYOCARDIAL_INFARCTION_MI", "Myocardial Infarction (MI)", F::YesNoNa),
    FieldDef::new("DATE_OF_THE_FIRST_MI", "Date of the first MI", F::Date),
    FieldDef::new("ACS_DURING_FOLLOW_UP", "ACS during follow up", F::YesNoNa),
    FieldDef::new("DATE_OF_THE_FIRST_ACS", "Date of the first ACS", F::Date),
    FieldDef::new("ISCHEMIC_STROKE", "Ischemic Stroke", F::YesNoNa),
    FieldDef::new("DATE_OF_ISCHEMIC_STROKE", "Date of Ischemic Stroke", F::Date),
    FieldDef::new("HEMORRHAGIC_STROKE", "Hemorrhagic Stroke", F::YesNoNa),
    FieldDef::new("DATE_OF_HEMORRHAGIC_STROKE", "Date of Hemorrhagic Stroke", F::Date),
    FieldDef::new("EMBOLIC_EVENT_CHOICE_0", "Embolic Event (choice=0)", F::Checked),
    FieldDef::new("EMBOLIC_EVENT_CHOICE_1", "Embolic Event (choice=1)", F::Checked),
    FieldDef::new("EMBOLIC_EVENT_CHOICE_2", "Embolic Event (choice=2)", F::Checked),
    FieldDef::new("EMBOLIC_EVENT_CHOICE_3", "Embolic Event (choice=3)", F::Checked),
    FieldDef::new("EMBOLIC_EVENT_CHOICE_4", "Embolic Event (choice=4)", F::Checked),
    FieldDef::new("EMBOLIC_EVENT_CHOICE_5", "Embolic Event (choice=5)", F::Checked),
    FieldDef::new("EMBOLIC_EVENT_CHOICE_MD", "Embolic Event (choice=MD)", F::Checked),
    FieldDef::new("DATE_OF_EMBOLIC_EVENT", "Date of embolic event", F::Date),
    FieldDef::new("INR_AT_EMBOLIC_EVENT", "INR at Embolic event", F::Decimal).bounded(1.0, 7.0),
    FieldDef::new("EGFR_30_ML_MIN_1_73M_2", "eGFR < 30 ml/min/1.73m^2", F::YesNoNa),
    FieldDef::new("EGFR_AT_EMBOLIC_EVENT", "eGFR at Embolic event", F::Decimal).bounded(5.0, 200.0),
    FieldDef::new("PATIENT_DECEASED", "Patient Deceased?", F::YesNoNa),
    FieldDef::new("DATE_OF_DEATH", "Date of Death", F::Date),
    FieldDef::new("DATE_OF_LAST_FOLLOW_UP", "Date of Last Follow up", F::Date),
    // Laboratory values (C8, N8, W8)
    FieldDef::new(
        "TIME_INTERVAL_BETWEEN_LOADING_DOSE_AND_VERIFYNOW_PLATELET_AGGREGATION_MEASURES",
        "Time interval between loading dose and VerifyNow platelet aggregation measures",
        F::Decimal,
    ),
    FieldDef::new(
        "VERIFYNOW_ADP_STIMULATED_AGGREGATION_WHILE_ON_MAINTENANCE_DOSE_OF_CLOPIDOGREL_PRU",
        "VerifyNow ADP stimulated Aggregation (while on maintenance dose of Clopidogrel) PRU",
        F::Integer,
    )
    .bounded(0.0, 400.0),
    FieldDef::new(
        "VERIFYNOW_ADP_STIMULATED_AGGREGATION_WHILE_ON_MAINTENANCE_DOSE_OF_CLOPIDOGREL_INHIBITION",
        "VerifyNow ADP stimulated Aggregation (while on maintenance dose of Clopidogrel) % Inhibition",
        F::Decimal,
    )
    .bounded(0.0, 100.0),
    FieldDef::new("BUN_MG_DL", "BUN (mg/dL)", F::Decimal).bounded(1.0, 120.0),
    FieldDef::new("CREATININE_LEVEL_MG_DL", "Creatinine level (mg/dL)", F::Decimal).bounded(0.01, 15.0),
    FieldDef::new("BLOOD_CELL_COUNT_OPTIONAL", "Blood cell count (Optional)", F::YesNoNa),
    FieldDef::new(
        "ABSOLUTE_WHITE_CELL_COUNT_X10_3_CELLS_UL",
        "Absolute White cell count (cells/microL)",
        F::Decimal,
    )
    .bounded(0.0, 20.0),
    FieldDef::new(
        "RED_CELL_COUNT_X10_6_CELLS_UL",
        "Red cell count (cells/microL)",
        F::Decimal,
    )
    .bounded(3.0, 7.0),
    FieldDef::new(
        "PLATELET_COUNT_X10_3_UL",
        "Platelet count (cells/microL)",
        F::Integer,
    )
    .bounded(100.0, 450.0),
    FieldDef::new("MEAN_PLATELET_VOLUME_FL", "Mean platelet volume (fL)", F::Decimal),
    FieldDef::new("HEMATOCRIT", "Hematocrit (%)", F::Decimal).bounded(15.0, 55.0),
    FieldDef::new(
        "HEMOGLOBIN_G_DL__PRE_CLOPIDOGREL",
        "Hemoglobin (g/dL)_pre-clopidogrel",
        F::Decimal,
    )
    .bounded(5.0, 17.0),
    FieldDef::new("PLASMA_UREA_MMOL_L", "Plasma Urea (mmol/L)", F::Decimal),
    FieldDef::new(
        "VARIOUS_CHOLESTEROL_MEASUREMENT_TOTAL_LDL_HDL_ETC",
        "Various cholesterol measurement (total, LDL, HDL, etc.)",
        F::FreeText,
    ),
    FieldDef::new(
        "VARIOUS_CHOLESTEROL_MEASUREMENT_TOTAL_LDL_HDL_ETC_REQUIRED",
        "Various cholesterol measurement (total, LDL, HDL, etc.) (Required)",
        F::YesNoNa,
    ),
    FieldDef::new("LDL_MG_DL", "LDL (mg/dL)", F::Integer).bounded(45.0, 200.0),
    FieldDef::new("HDL_MG_DL", "HDL (mg/dL)", F::Integer).bounded(20.0, 120.0),
    FieldDef::new("TOTAL_CHOLESTEROL_MG_DL", "Total Cholesterol (mg/dL)", F::Integer).bounded(80.0, 500.0),
    FieldDef::new("TRIGLYCERIDES_MG_DL", "Triglycerides (mg/dL)", F::Integer).bounded(50.0, 500.0),
    FieldDef::new(
        "ABSOLUTE_WHITE_CELL_COUNT_X10_3_CELLS_UL_ON_PLAVIX",
        "Absolute White cell count (cells/microL) on Plavix",
        F::Decimal,
    )
    .bounded(0.0, 20.0),
    FieldDef::new(
        "RED_CELL_COUNT_X10_6_CELLS_UL_ON_PLAVIX",
        "Red cell count (cells/microL) on Plavix",
        F::Decimal,
    )
    .bounded(3.0, 7.0),
    FieldDef::new(
        "PLATELET_COUNT_X10_3_UL_ON_PLAVIX",
        "Platelet count (cells/microL) on Plavix",
        F::Integer,
    )
    .bounded(100.0, 450.0),
    FieldDef::new(
        "MEAN_PLATELET_VOLUME_FL_ON_PLAVIX",
        "Mean platelet volume (fL) on Plavix",
        F::Decimal,
    ),
    FieldDef::new("HEMATOCRIT_ON_PLAVIX", "Hematocrit (%) on Plavix", F::Decimal).bounded(15.0, 55.0),
    FieldDef::new(
        "HEMOGLOBIN_G_DL_ON_PLAVIX",
        "Hemoglobin (g/dL) on Plavix",
        F::Decimal,
    )
    .bounded(5.0, 17.0),
    FieldDef::new("PLATELET_COUNT", "Platelet count", F::Decimal).bounded(100.0, 450.0),
    FieldDef::new("CREATININE_CLEARANCE_CRCL", "Creatinine clearance (CrCl)", F::Decimal)
        .bounded(5.0, 200.0),
    FieldDef::new("HEMOGLOBIN_G_DL", "Hemoglobin (g/dL)", F::Decimal).bounded(5.0, 17.0),
    FieldDef::new(
        "DILUTED_T_TIME_MEASUREMENT_DABIGATRAN_SECS",
        "Diluted T time measurement (dabigatran) (secs)",
        F::Decimal,
    )
    .bounded(50.0, 250.0),
    FieldDef::new(
        "ANTI_FACTOR_XA_ACTIVITY_NG_ML",
        "Anti-factor Xa activity (ng/mL)",
        F::Decimal,
    )
    .bounded(22.0, 500.0),
    // Computed output columns
    FieldDef::new("TIME_TO_BLEEDING_EVENT", "Time to Bleeding Event (in days)", F::FreeText),
    FieldDef::new("TIME_TO_MACE", "Time to MACE (in days)", F::FreeText),
    FieldDef::new("TIME_TO_STEMI", "Time to first STEMI (in days)", F::FreeText),
    FieldDef::new("TIME_TO_NSTEMI", "Time to first NSTEMI (in days)", F::FreeText),
    FieldDef::new("TIME_TO_ANGINA", "Time to unstable angina (in days)", F::FreeText),
    FieldDef::new("TIME_TO_THROMB", "Time to thrombosis (in days)", F::FreeText),
    FieldDef::new("TIME_TO_CARD_DEATH", "Time to cardiac death (in days)", F::FreeText),
    FieldDef::new("TIME_TO_MI", "Time to MI (in days)", F::FreeText),
    FieldDef::new("TIME_TO_ACS", "Time to first ACS (in days)", F::FreeText),
    FieldDef::new("TIME_TO_ISC_STROKE", "Time to ischemic stroke (in days)", F::FreeText),
    FieldDef::new("TIME_TO_HEM_STROKE", "Time to hemorrhagic stroke (in days)", F::FreeText),
    FieldDef::new("TIME_TO_DEATH", "Time to death (in days)", F::FreeText),
    FieldDef::new(
        "DURATION_FOLLOWUP",
        "Calculated Duration of follow-up (in days)",
        F::FreeText,
    ),
    FieldDef::new("TIME_TO_EMBOLIC_EVENT", "Time to Embolic Event (in days)", F::FreeText),
    FieldDef::new("TIME_TO_BLOOD_DRAW", "Time to blood draw (in hours)", F::FreeText),
    FieldDef::new("EMBOLIC_EVENT", "Embolic Event", F::FreeText),
    FieldDef::new(
        "INDICATION_FOR_NOAC_TREATMENT",
        "Indication for NOAC Treatment",
        F::FreeText,
    ),
    FieldDef::new("WHICH_NOAC_DRUG_USED", "Which NOAC Drug Used", F::FreeText),
    FieldDef::new(
        "INDICATION_FOR_CLOPIDOGREL_TREATMENT",
        "Indication for Clopidogrel Treatment",
        F::FreeText,
    ),
    FieldDef::new(
        "INDICATION_FOR_WARFARIN_TREATMENT",
        "Indication for Warfarin Treatment",
        F::FreeText,
    ),
    FieldDef::new(
        "BINNED_AGE",
        "Age at enrollment (with over 89 binning)",
        F::FreeText,
    ),
];

/// Loads the built-in field catalog.
pub fn load_default_catalog() -> Result<FieldCatalog> {
    Ok(FieldCatalog::new(FIELDS)?)
}
