//! Locale-keyed text for the presentation layer.
//!
//! The calculator never reads from here; only reports, error messages and
//! the info pages do.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::planner::{Plan, PlanOutcome, Standing};
use crate::error::{ConfigError, GpaError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

/// Static info-panel content for one locale.
#[derive(Debug)]
pub struct InfoContent {
    pub title: &'static str,
    pub about_heading: &'static str,
    pub about: &'static [&'static str],
    pub grading_heading: &'static str,
    /// Column headers: letter grade, grade points, percentage.
    pub grading_columns: [&'static str; 3],
    pub below: &'static str,
    pub faq_heading: &'static str,
    pub faq: &'static [(&'static str, &'static str)],
    pub tips_heading: &'static str,
    pub tips: &'static [&'static str],
}

/// Labels for a rendered result.
#[derive(Debug)]
pub struct Labels {
    pub semester_hours: &'static str,
    pub total_hours: &'static str,
    pub semester_gpa: &'static str,
    pub cumulative_gpa: &'static str,
    pub standing: &'static str,
    pub target_gpa: &'static str,
    pub remaining_hours: &'static str,
    pub required_gpa: &'static str,
}

static EN_INFO: InfoContent = InfoContent {
    title: "GPA Calculator Information",
    about_heading: "About This Calculator",
    about: &[
        "This GPA calculator is designed for Arab Open University (AOU) students. It calculates both your semester GPA and cumulative GPA based on the university's grading system.",
        "The calculator uses the standard 4.0 scale and supports both English and Arabic.",
    ],
    grading_heading: "Grading Scale",
    grading_columns: ["Letter Grade", "Grade Points", "Percentage"],
    below: "Below",
    faq_heading: "Frequently Asked Questions",
    faq: &[
        (
            "How do I use this calculator?",
            "1. Enter your previous GPA and total hours completed\n2. Add the current semester courses\n3. Enter the grade and credit hours for each course\n4. Calculate to see your semester and cumulative GPA",
        ),
        (
            "What if I don't have a previous GPA?",
            "If this is your first semester, leave the previous GPA and hours empty or enter 0. Only your semester GPA is computed.",
        ),
        (
            "Can I calculate GPA for multiple semesters?",
            "Yes. Enter your cumulative GPA and total hours from all previous semesters, then add your current semester courses to get an updated cumulative GPA.",
        ),
        (
            "What grades are accepted?",
            "A, B+, B, C+, C, D, F. Grades are case-insensitive.",
        ),
        (
            "Is my data saved or shared?",
            "No. All calculations run locally. No data is saved, stored, or transmitted.",
        ),
        (
            "What's the difference between Semester and Cumulative GPA?",
            "Semester GPA uses only the current semester's courses. Cumulative GPA includes all courses from all semesters combined.",
        ),
    ],
    tips_heading: "Tips for Success",
    tips: &[
        "Double-check your grades and credit hours before calculating",
        "Use this calculator to plan your future semester course loads",
    ],
};

static AR_INFO: InfoContent = InfoContent {
    title: "معلومات حول حاسبة المعدل",
    about_heading: "حول هذه الحاسبة",
    about: &[
        "هذه الحاسبة مخصصة لطلاب الجامعة العربية المفتوحة. تساعدك في حساب المعدل الفصلي والمعدل التراكمي بناءً على نظام الدرجات في الجامعة.",
        "تستخدم الحاسبة مقياس 4.0 القياسي وتدعم اللغتين العربية والإنجليزية.",
    ],
    grading_heading: "سلم الدرجات",
    grading_columns: ["الدرجة", "النقاط", "النسبة المئوية"],
    below: "أقل من",
    faq_heading: "الأسئلة الشائعة",
    faq: &[
        (
            "كيف أستخدم هذه الحاسبة؟",
            "1. أدخل المعدل السابق وعدد الساعات المكتملة\n2. أضف مواد الفصل الحالي\n3. أدخل الدرجة وعدد الساعات لكل مادة\n4. احسب لعرض المعدل الفصلي والتراكمي",
        ),
        (
            "ماذا أفعل إذا لم يكن لدي معدل سابق؟",
            "إذا كان هذا أول فصل لك، اترك حقول المعدل والساعات السابقة فارغة أو أدخل 0. سيتم حساب المعدل الفصلي فقط.",
        ),
        (
            "هل يمكنني حساب المعدل لأكثر من فصل؟",
            "نعم! أدخل المعدل التراكمي وعدد الساعات لجميع الفصول السابقة، ثم أضف مواد الفصل الحالي للحصول على المعدل الجديد.",
        ),
        (
            "ما هي الدرجات المقبولة؟",
            "الحاسبة تقبل: A, B+, B, C+, C, D, F (غير حساسة لحالة الأحرف).",
        ),
        (
            "هل يتم حفظ أو مشاركة بياناتي؟",
            "لا، جميع العمليات تتم محليًا ولا يتم حفظ أو إرسال أي بيانات.",
        ),
        (
            "ما الفرق بين المعدل الفصلي والتراكمي؟",
            "المعدل الفصلي يحسب فقط من مواد الفصل الحالي. المعدل التراكمي يشمل جميع المواد من كل الفصول.",
        ),
    ],
    tips_heading: "نصائح للنجاح",
    tips: &[
        "تحقق من الدرجات والساعات قبل الحساب",
        "استخدم الحاسبة لتخطيط عبء المواد في الفصول القادمة",
    ],
};

static EN_LABELS: Labels = Labels {
    semester_hours: "Semester Hours",
    total_hours: "Total Hours",
    semester_gpa: "Semester GPA",
    cumulative_gpa: "Cumulative GPA",
    standing: "Advice",
    target_gpa: "Target GPA",
    remaining_hours: "Remaining Hours",
    required_gpa: "Required GPA",
};

static AR_LABELS: Labels = Labels {
    semester_hours: "ساعات الفصل",
    total_hours: "مجموع الساعات",
    semester_gpa: "المعدل الفصلي",
    cumulative_gpa: "المعدل التراكمي",
    standing: "نصيحة",
    target_gpa: "المعدل المستهدف",
    remaining_hours: "الساعات المتبقية",
    required_gpa: "المعدل المطلوب",
};

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Locale::En => Direction::Ltr,
            Locale::Ar => Direction::Rtl,
        }
    }

    pub fn info(self) -> &'static InfoContent {
        match self {
            Locale::En => &EN_INFO,
            Locale::Ar => &AR_INFO,
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN_LABELS,
            Locale::Ar => &AR_LABELS,
        }
    }

    /// Message shown in place of a result when a calculation is refused.
    pub fn error_message(self, err: &GpaError) -> String {
        match (self, err) {
            (Locale::En, GpaError::InvalidGrade(g)) => {
                format!("'{g}' is not a valid grade. Use A, B+, B, C+, C, D or F")
            }
            (Locale::Ar, GpaError::InvalidGrade(g)) => {
                format!("'{g}' ليست درجة صحيحة. استخدم A, B+, B, C+, C, D أو F")
            }
            (Locale::En, GpaError::InvalidHours(h)) => {
                format!("'{h}' is not a valid number of hours")
            }
            (Locale::Ar, GpaError::InvalidHours(h)) => {
                format!("'{h}' ليس عددًا صحيحًا من الساعات")
            }
            (Locale::En, GpaError::OutOfRangeGpa(_)) => {
                "Previous GPA must be between 0.0 and 4.0".to_string()
            }
            (Locale::Ar, GpaError::OutOfRangeGpa(_)) => {
                "يجب أن يكون المعدل السابق بين 0.0 و 4.0".to_string()
            }
            (Locale::En, GpaError::OutOfRangeTarget(_)) => {
                "Target GPA must be between 0.0 and 4.0".to_string()
            }
            (Locale::Ar, GpaError::OutOfRangeTarget(_)) => {
                "يجب أن يكون المعدل المستهدف بين 0.0 و 4.0".to_string()
            }
            (Locale::En, GpaError::InvalidPriorGpa(g)) => {
                format!("Previous GPA '{g}' is not a number")
            }
            (Locale::Ar, GpaError::InvalidPriorGpa(g)) => {
                format!("المعدل السابق '{g}' ليس رقمًا")
            }
            (Locale::En, GpaError::NoData) => "Please enter valid grades and hours".to_string(),
            (Locale::Ar, GpaError::NoData) => "الرجاء إدخال درجات وساعات صحيحة".to_string(),
        }
    }

    /// Shown when any row still holds an invalid value.
    pub fn invalid_inputs_message(self) -> &'static str {
        match self {
            Locale::En => "Please correct invalid inputs before calculating",
            Locale::Ar => "الرجاء تصحيح المدخلات غير الصحيحة قبل الحساب",
        }
    }

    pub fn advice(self, standing: Standing) -> &'static str {
        match (self, standing) {
            (Locale::En, Standing::Excellent) => "Excellent work! Maintain your high standards.",
            (Locale::En, Standing::Good) => {
                "Good performance. Consider targeting higher grades to improve further."
            }
            (Locale::En, Standing::Satisfactory) => {
                "You're meeting minimum requirements. Focus on improvement strategies."
            }
            (Locale::En, Standing::AtRisk) => {
                "Consider seeking academic support and reviewing study strategies."
            }
            (Locale::Ar, Standing::Excellent) => "عمل ممتاز! حافظ على مستواك المرتفع.",
            (Locale::Ar, Standing::Good) => "أداء جيد. استهدف درجات أعلى لتحسين معدلك أكثر.",
            (Locale::Ar, Standing::Satisfactory) => {
                "أنت تحقق الحد الأدنى من المتطلبات. ركز على استراتيجيات التحسين."
            }
            (Locale::Ar, Standing::AtRisk) => "فكر في طلب الدعم الأكاديمي ومراجعة أساليب الدراسة.",
        }
    }

    /// One-line verdict for a target-GPA projection.
    pub fn plan_verdict(self, plan: &Plan) -> &'static str {
        match (self, plan.outcome()) {
            (Locale::En, PlanOutcome::NoRemainingHours) => "No remaining hours to plan for.",
            (Locale::En, PlanOutcome::AlreadyMet) => "Target already secured.",
            (Locale::En, PlanOutcome::Reachable) => "Target is reachable.",
            (Locale::En, PlanOutcome::OutOfReach) => {
                "Target is out of reach within the remaining hours."
            }
            (Locale::Ar, PlanOutcome::NoRemainingHours) => "لا توجد ساعات متبقية للتخطيط.",
            (Locale::Ar, PlanOutcome::AlreadyMet) => "المعدل المستهدف مضمون بالفعل.",
            (Locale::Ar, PlanOutcome::Reachable) => "يمكن الوصول إلى المعدل المستهدف.",
            (Locale::Ar, PlanOutcome::OutOfReach) => {
                "لا يمكن الوصول إلى المعدل المستهدف خلال الساعات المتبقية."
            }
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ar" | "arabic" => Ok(Locale::Ar),
            other => Err(ConfigError::UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("AR".parse::<Locale>().unwrap(), Locale::Ar);
        assert_eq!("arabic".parse::<Locale>().unwrap(), Locale::Ar);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_direction() {
        assert_eq!(Locale::En.direction(), Direction::Ltr);
        assert_eq!(Locale::Ar.direction(), Direction::Rtl);
    }

    #[test]
    fn test_info_tables_have_same_shape() {
        let en = Locale::En.info();
        let ar = Locale::Ar.info();
        assert_eq!(en.about.len(), ar.about.len());
        assert_eq!(en.faq.len(), ar.faq.len());
        assert_eq!(en.tips.len(), ar.tips.len());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Locale::En.error_message(&GpaError::NoData),
            "Please enter valid grades and hours"
        );
        assert_eq!(
            Locale::En.error_message(&GpaError::OutOfRangeGpa(4.5)),
            "Previous GPA must be between 0.0 and 4.0"
        );
        // Negative values share the range message.
        assert_eq!(
            Locale::En.error_message(&GpaError::OutOfRangeGpa(-1.0)),
            Locale::En.error_message(&GpaError::OutOfRangeGpa(4.5))
        );
        assert!(
            Locale::Ar
                .error_message(&GpaError::OutOfRangeGpa(-1.0))
                .contains("بين 0.0 و 4.0")
        );
        assert_eq!(
            Locale::En.error_message(&GpaError::OutOfRangeTarget(9.0)),
            "Target GPA must be between 0.0 and 4.0"
        );
        assert!(
            Locale::Ar
                .error_message(&GpaError::InvalidGrade("E".into()))
                .contains("'E'")
        );
    }

    #[test]
    fn test_plan_verdict() {
        assert_eq!(
            Locale::En.plan_verdict(&Plan::project(3.0, 2.5, 30.0, 30.0)),
            "Target is reachable."
        );
        assert_eq!(
            Locale::En.plan_verdict(&Plan::project(3.8, 2.0, 90.0, 15.0)),
            "Target is out of reach within the remaining hours."
        );
        assert_eq!(
            Locale::En.plan_verdict(&Plan::project(3.0, 2.0, 30.0, 0.0)),
            "No remaining hours to plan for."
        );
        assert_eq!(
            Locale::En.plan_verdict(&Plan::project(2.0, 4.0, 60.0, 6.0)),
            "Target already secured."
        );
    }

    #[test]
    fn test_advice() {
        assert_eq!(
            Locale::En.advice(Standing::Excellent),
            "Excellent work! Maintain your high standards."
        );
        assert_ne!(Locale::Ar.advice(Standing::AtRisk), Locale::En.advice(Standing::AtRisk));
    }
}
