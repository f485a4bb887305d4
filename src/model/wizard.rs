//! Troubleshooting wizard questionnaire and diagnosis rules.
//!
//! The wizard walks through a fixed list of multiple-choice questions and, once the last
//! question is answered, builds a diagnosis text from a declarative rule table. The
//! diagnosis only depends on the answers to the first two questions; the third question is
//! collected for the user's benefit but does not contribute a fragment.

/// A selectable answer for a wizard question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A single wizard question with its options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardStep {
    pub question: &'static str,
    pub options: &'static [WizardOption],
}

impl WizardStep {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

pub static WIZARD_STEPS: [WizardStep; 3] = [
    WizardStep {
        question: "What type of issue are you experiencing?",
        options: &[
            WizardOption {
                value: "heating",
                label: "No heating",
            },
            WizardOption {
                value: "cooling",
                label: "No cooling",
            },
            WizardOption {
                value: "noise",
                label: "Unusual noise",
            },
            WizardOption {
                value: "leak",
                label: "Water leak",
            },
            WizardOption {
                value: "error",
                label: "Error code displayed",
            },
        ],
    },
    WizardStep {
        question: "When did the problem start?",
        options: &[
            WizardOption {
                value: "sudden",
                label: "Suddenly/immediately",
            },
            WizardOption {
                value: "gradual",
                label: "Gradually over time",
            },
            WizardOption {
                value: "intermittent",
                label: "Comes and goes",
            },
            WizardOption {
                value: "startup",
                label: "After installation/startup",
            },
        ],
    },
    WizardStep {
        question: "Have you checked the basics?",
        options: &[
            WizardOption {
                value: "power",
                label: "Power supply is on",
            },
            WizardOption {
                value: "thermostat",
                label: "Thermostat set correctly",
            },
            WizardOption {
                value: "filters",
                label: "Filters are clean",
            },
            WizardOption {
                value: "breaker",
                label: "Circuit breaker not tripped",
            },
        ],
    },
];

/// Condition under which a diagnosis rule contributes its fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCondition {
    /// The answer at `step` equals `value`
    AnswerEquals { step: usize, value: &'static str },
}

impl RuleCondition {
    fn matches(&self, answers: &[Option<String>]) -> bool {
        match self {
            Self::AnswerEquals { step, value } => {
                answers.get(*step).and_then(|a| a.as_deref()) == Some(*value)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosisRule {
    pub condition: RuleCondition,
    pub fragment: &'static str,
}

pub static DIAGNOSIS_HEADER: &str = "Based on your answers:\n\n";

pub static DIAGNOSIS_FOOTER: &str =
    "\n• Recommended: Contact certified technician if issue persists";

/// Rules are applied in order; every matching rule appends its fragment.
pub static DIAGNOSIS_RULES: [DiagnosisRule; 5] = [
    DiagnosisRule {
        condition: RuleCondition::AnswerEquals {
            step: 0,
            value: "heating",
        },
        fragment: "• Check outdoor unit for ice buildup\n• Verify refrigerant levels\n• Inspect compressor operation\n",
    },
    DiagnosisRule {
        condition: RuleCondition::AnswerEquals {
            step: 0,
            value: "cooling",
        },
        fragment: "• Check air filters\n• Verify outdoor unit operation\n• Check refrigerant pressure\n",
    },
    DiagnosisRule {
        condition: RuleCondition::AnswerEquals {
            step: 0,
            value: "noise",
        },
        fragment: "• Inspect fan blades for damage\n• Check mounting bolts\n• Verify compressor operation\n",
    },
    DiagnosisRule {
        condition: RuleCondition::AnswerEquals {
            step: 0,
            value: "leak",
        },
        fragment: "• Inspect condensate drain\n• Check pipe connections\n• Verify pressure relief valve\n",
    },
    DiagnosisRule {
        condition: RuleCondition::AnswerEquals {
            step: 1,
            value: "sudden",
        },
        fragment: "\n• Priority: Check for electrical issues\n• Look for recent system changes\n",
    },
];

/// Builds the diagnosis text for a set of answers indexed by step.
pub fn generate_diagnosis(answers: &[Option<String>]) -> String {
    let mut diagnosis = String::from(DIAGNOSIS_HEADER);

    for rule in DIAGNOSIS_RULES.iter() {
        if rule.condition.matches(answers) {
            diagnosis.push_str(rule.fragment);
        }
    }

    diagnosis.push_str(DIAGNOSIS_FOOTER);

    diagnosis
}

/// Progress through the wizard questionnaire.
///
/// An empty diagnosis means the questionnaire is still in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    step: usize,
    answers: Vec<Option<String>>,
    diagnosis: String,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: 0,
            answers: vec![None; WIZARD_STEPS.len()],
            diagnosis: String::new(),
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current_step(&self) -> &'static WizardStep {
        &WIZARD_STEPS[self.step]
    }

    pub fn current_answer(&self) -> Option<&str> {
        self.answers[self.step].as_deref()
    }

    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    pub fn diagnosis(&self) -> &str {
        &self.diagnosis
    }

    pub fn has_diagnosis(&self) -> bool {
        !self.diagnosis.is_empty()
    }

    pub fn is_last_step(&self) -> bool {
        self.step == WIZARD_STEPS.len() - 1
    }

    /// "Step N of M" progress label
    pub fn step_label(&self) -> String {
        format!("Step {} of {}", self.step + 1, WIZARD_STEPS.len())
    }

    /// Records the answer for the current step, ignoring values that are not one of its options
    pub fn answer(&mut self, value: &str) {
        if self.current_step().has_option(value) {
            self.answers[self.step] = Some(value.to_string());
        }
    }

    pub fn can_advance(&self) -> bool {
        self.current_answer().is_some()
    }

    /// Advances to the next step, or generates the diagnosis when on the last step.
    ///
    /// Does nothing while the current step is unanswered.
    pub fn next(&mut self) {
        if !self.can_advance() {
            return;
        }

        if self.is_last_step() {
            self.diagnosis = generate_diagnosis(&self.answers);
        } else {
            self.step += 1;
        }
    }

    pub fn back(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
