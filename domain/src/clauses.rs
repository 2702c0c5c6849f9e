use serde::{Deserialize, Serialize};

/// One qualification requirement from the RFP, answered independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clause {
    pub label: String,
    pub question: String,
}

impl Clause {
    pub fn new(label: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            question: question.into(),
        }
    }
}

/// Technical criteria clauses from the DVC Raghunathpur RFP, used when the
/// operator supplies no clause file.
pub fn default_clauses() -> Vec<Clause> {
    vec![
        Clause::new(
            "1.1.0",
            "The Bidder should have executed on Engineering, Procurement and \
             Construction (EPC) basis, minimum one (1) no. Coal based/Lignite based \
             power plant of atleast 500 MW Unit capacity comprising of atleast \
             a) Coal / lignite handling plant, b) Cooling Tower, c) Water / waste \
             water treatment plant or DM plant, including associated civil works, \
             Structural and Electrical systems for the above equipments and systems \
             as a single package, which is in successful operation for a period of \
             not less than one (1) year prior to the date of techno-commercial bid \
             opening.",
        ),
        Clause::new(
            "1.2.0",
            "The Bidder (itself or along with its subsidiary(ies)) should have \
             executed on Engineering, Procurement and Construction (EPC) basis, \
             minimum one (1) no. Coal based/Lignite based power plant of installed \
             capacity not less than 250 MW comprising of a) Main Power Plant and \
             b) Balance of Plant (having Coal / lignite handling plant, Cooling \
             Tower, Water / waste water treatment plant or DM plant) facilities, \
             including associated civil works, Structural and Electrical systems \
             for the above equipments and systems as a single package, which is in \
             successful operation for a period of not less than one (1) year prior \
             to the date of techno-commercial bid opening.",
        ),
        Clause::new(
            "1.3.0",
            "Bidder shall be a Consortium (unincorporated grouping) of minimum two \
             (2) and maximum upto three (3) corporate entities and shall \
             collectively meet the following qualification requirements.",
        ),
    ]
}
