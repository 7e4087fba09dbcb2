/// AP subjects recognised by the College Board, as offered to clients building profiles.
const AP_SUBJECTS: [&str; 38] = [
    "AP Calculus AB",
    "AP Calculus BC",
    "AP Statistics",
    "AP Computer Science A",
    "AP Computer Science Principles",
    "AP Biology",
    "AP Chemistry",
    "AP Physics 1: Algebra-Based",
    "AP Physics 2: Algebra-Based",
    "AP Physics C: Mechanics",
    "AP Physics C: Electricity and Magnetism",
    "AP Environmental Science",
    "AP English Language and Composition",
    "AP English Literature and Composition",
    "AP United States History",
    "AP World History: Modern",
    "AP European History",
    "AP United States Government and Politics",
    "AP Comparative Government and Politics",
    "AP Macroeconomics",
    "AP Microeconomics",
    "AP Psychology",
    "AP Human Geography",
    "AP Spanish Language and Culture",
    "AP Spanish Literature and Culture",
    "AP French Language and Culture",
    "AP German Language and Culture",
    "AP Italian Language and Culture",
    "AP Chinese Language and Culture",
    "AP Japanese Language and Culture",
    "AP Latin",
    "AP Art History",
    "AP Music Theory",
    "AP Studio Art: 2-D Design",
    "AP Studio Art: 3-D Design",
    "AP Studio Art: Drawing",
    "AP Seminar",
    "AP Research",
];

pub fn ap_subjects() -> &'static [&'static str] {
    &AP_SUBJECTS
}
