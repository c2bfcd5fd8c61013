//! Injury types and the recovery guidance attached to each.

use serde::{Deserialize, Serialize};

/// Injury recorded on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InjuryType {
    #[default]
    AclTear,
    AclMeniscus,
    AclMcl,
    AclPcl,
    Other,
}

impl InjuryType {
    pub const ALL: [InjuryType; 5] = [
        InjuryType::AclTear,
        InjuryType::AclMeniscus,
        InjuryType::AclMcl,
        InjuryType::AclPcl,
        InjuryType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InjuryType::AclTear => "ACL Tear",
            InjuryType::AclMeniscus => "ACL + Meniscus",
            InjuryType::AclMcl => "ACL + MCL",
            InjuryType::AclPcl => "ACL + PCL",
            InjuryType::Other => "Other",
        }
    }

    /// Parse a stored label. Unknown or empty labels map to `Other`, the
    /// catalog's catch-all entry.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() {
            return InjuryType::default();
        }
        InjuryType::ALL
            .into_iter()
            .find(|injury| injury.label().eq_ignore_ascii_case(label))
            .unwrap_or(InjuryType::Other)
    }

    pub fn description(&self) -> &'static str {
        match self {
            InjuryType::AclTear => {
                "An ACL tear is a rupture of the anterior cruciate ligament, one of the four main \
                 ligaments in the knee. It's commonly caused by sudden stops, changes in direction, \
                 or direct impact."
            }
            InjuryType::AclMeniscus => {
                "This combined injury involves both the ACL and the meniscus, which is the cartilage \
                 that cushions the knee joint. Meniscus injuries may affect weight-bearing and \
                 increase recovery complexity."
            }
            InjuryType::AclMcl => {
                "This injury combines an ACL tear with damage to the medial collateral ligament \
                 (MCL), which provides stability to the inner knee. The MCL often heals without \
                 surgery."
            }
            InjuryType::AclPcl => {
                "This complex injury involves both the anterior and posterior cruciate ligaments, \
                 creating significant knee instability and requiring careful rehabilitation."
            }
            InjuryType::Other => {
                "Your knee injury has unique characteristics. Work closely with your surgeon and \
                 physical therapist to understand the specific requirements of your rehabilitation."
            }
        }
    }

    /// Key recovery considerations.
    pub fn considerations(&self) -> &'static [&'static str] {
        match self {
            InjuryType::AclTear => &[
                "Focus on regaining full extension early in recovery",
                "Gradually rebuild quadriceps and hamstring strength",
                "Ensure proper graft protection during initial healing phase",
                "Work on proprioception and balance exercises",
            ],
            InjuryType::AclMeniscus => &[
                "Weight-bearing restrictions may be longer than with isolated ACL tears",
                "ROM progression may be more conservative",
                "May require specific modifications to protect the meniscus repair",
                "Longer timeframe before returning to pivoting sports",
            ],
            InjuryType::AclMcl => &[
                "May require wearing a brace for additional stability",
                "Focus on medial knee stability exercises",
                "Often needs modified rehabilitation timeline",
                "Special attention to valgus stress protection",
            ],
            InjuryType::AclPcl => &[
                "More complex stability concerns due to multi-ligament injury",
                "More restrictive motion protocol initially",
                "Extended recovery timeline compared to isolated ACL tears",
                "Higher risk of complications and arthrofibrosis",
            ],
            InjuryType::Other => &[
                "Follow the specific protocols from your healthcare provider",
                "Report any unusual symptoms promptly",
                "Keep detailed notes on your progress and setbacks",
                "Be patient with your personal recovery timeline",
            ],
        }
    }
}

impl std::fmt::Display for InjuryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
