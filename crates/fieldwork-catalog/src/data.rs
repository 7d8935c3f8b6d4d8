//! The built-in platform-worker survey definition.
//!
//! 19 categories, answered in a fixed sequence. Question ids follow the
//! `<CATEGORY>_<NUMBER>[letter]` convention checked by [`crate::integrity`].

use std::sync::LazyLock;

use fieldwork_core::models::question::{InputType, Question};

use crate::Catalog;

fn q(id: &str, text: &str, category: &str, code: &str, input_type: InputType) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        category_name: category.to_string(),
        category_code: code.to_string(),
        input_type,
        choices: None,
        follow_up_of: None,
    }
}

fn choice(id: &str, text: &str, category: &str, code: &str, options: &[&str]) -> Question {
    Question {
        choices: Some(options.iter().map(|o| o.to_string()).collect()),
        ..q(id, text, category, code, InputType::SingleChoice)
    }
}

pub static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let categories = [
        ("BI", "Basic Information"),
        ("PB", "Personal Background"),
        ("PI", "Platform Introduction"),
        ("PO", "Platform Overview"),
        ("WS", "Work Structure"),
        ("PE", "Payment & Earnings"),
        ("WC", "Work Costs"),
        ("UWT", "Unpaid Work Time"),
        ("CT", "Contracts & Terms"),
        ("HS", "Health & Safety"),
        ("DP", "Data & Privacy"),
        ("PM", "Platform Management"),
        ("SE", "Support Experience"),
        ("DUE", "Due Process"),
        ("DIS", "Discrimination"),
        ("WV", "Worker Voice"),
        ("CA", "Collective Action"),
        ("PC", "Platform Comparison"),
        ("RD", "Research Documentation"),
    ]
    .into_iter()
    .map(|(code, name)| (code.to_string(), name.to_string()))
    .collect();

    use InputType::{FreeText, LongText, YesNo};

    let questions = vec![
        // Basic Information
        q("BI_01", "Platform Name", "Basic Information", "BI", FreeText),
        choice(
            "BI_02",
            "Employment Type",
            "Basic Information",
            "BI",
            &["Employee", "Freelancer", "Contractor", "Self-employed", "Other"],
        ),
        q(
            "BI_03",
            "Interview Code & Date",
            "Basic Information",
            "BI",
            FreeText,
        ),
        // Personal Background
        choice(
            "PB_01",
            "Age and highest education level",
            "Personal Background",
            "PB",
            &[
                "18-25, High School",
                "18-25, College/University",
                "26-35, High School",
                "26-35, College/University",
                "36-45, High School",
                "36-45, College/University",
                "46-55, High School",
                "46-55, College/University",
                "55+, High School",
                "55+, College/University",
                "Prefer not to say",
            ],
        ),
        // Platform Introduction
        choice(
            "PI_01",
            "How long have you been working for this platform?",
            "Platform Introduction",
            "PI",
            &[
                "Less than 1 month",
                "1-3 months",
                "3-6 months",
                "6-12 months",
                "1-2 years",
                "2+ years",
            ],
        ),
        // Platform Overview
        choice(
            "PO_01",
            "Is this your main job or do you have others?",
            "Platform Overview",
            "PO",
            &[
                "This is my main job",
                "I have other jobs too",
                "This is a side job",
            ],
        ),
        q(
            "PO_02",
            "What challenges do you face with this work?",
            "Platform Overview",
            "PO",
            LongText,
        ),
        choice(
            "PO_03",
            "How does income compare to your previous job?",
            "Platform Overview",
            "PO",
            &[
                "Much better",
                "Somewhat better",
                "About the same",
                "Somewhat worse",
                "Much worse",
                "No previous job",
            ],
        ),
        // Work Structure
        q(
            "WS_01",
            "How many hours per day/week do you work?",
            "Work Structure",
            "WS",
            FreeText,
        ),
        choice(
            "WS_02",
            "Are you paid hourly or per task/service?",
            "Work Structure",
            "WS",
            &[
                "Hourly",
                "Per task",
                "Per service",
                "Fixed salary",
                "Commission-based",
                "Other",
            ],
        ),
        q(
            "WS_03",
            "How does the app assign tasks?",
            "Work Structure",
            "WS",
            LongText,
        ),
        q(
            "WS_04",
            "If you don't want a task can you cancel without penalty?",
            "Work Structure",
            "WS",
            YesNo,
        ),
        // Payment & Earnings
        q(
            "PE_01",
            "How much do you earn per hour/task?",
            "Payment & Earnings",
            "PE",
            FreeText,
        ),
        q(
            "PE_02",
            "How much do you make per week/month from the platform?",
            "Payment & Earnings",
            "PE",
            FreeText,
        ),
        choice(
            "PE_03",
            "How frequently are you paid?",
            "Payment & Earnings",
            "PE",
            &[
                "Daily",
                "Weekly",
                "Bi-weekly",
                "Monthly",
                "After each task",
                "Other",
            ],
        ),
        q(
            "PE_04",
            "Is payment always on time? Any delays?",
            "Payment & Earnings",
            "PE",
            YesNo,
        ),
        q(
            "PE_05",
            "Is payment always made in full? Any deductions?",
            "Payment & Earnings",
            "PE",
            YesNo,
        ),
        q(
            "PE_06",
            "How do you receive payment? Can you choose currency?",
            "Payment & Earnings",
            "PE",
            LongText,
        ),
        // Work Costs
        choice(
            "WC_01",
            "What proportion of your income goes to work costs?",
            "Work Costs",
            "WC",
            &["0-10%", "10-25%", "25-50%", "50-75%", "75%+"],
        ),
        q(
            "WC_02",
            "Do you pay commission or fees to the platform?",
            "Work Costs",
            "WC",
            YesNo,
        ),
        q(
            "WC_03",
            "Does your income fluctuate? Why?",
            "Work Costs",
            "WC",
            LongText,
        ),
        // Unpaid Work Time
        q(
            "UWT_01",
            "Is some work time unpaid (like applying for jobs)? How much?",
            "Unpaid Work Time",
            "UWT",
            LongText,
        ),
        q(
            "UWT_02",
            "Do you take excessive risks to get work or get paid?",
            "Unpaid Work Time",
            "UWT",
            YesNo,
        ),
        // Contracts & Terms
        q(
            "CT_01",
            "Do you have an employment contract or terms & conditions?",
            "Contracts & Terms",
            "CT",
            YesNo,
        ),
        q(
            "CT_02",
            "Are terms clear and understandable?",
            "Contracts & Terms",
            "CT",
            YesNo,
        ),
        q(
            "CT_03",
            "Do you have digital access to the contract?",
            "Contracts & Terms",
            "CT",
            YesNo,
        ),
        q(
            "CT_04",
            "Where can you access the contract/terms?",
            "Contracts & Terms",
            "CT",
            LongText,
        ),
        q(
            "CT_05",
            "Do terms include pay details bonuses incentives?",
            "Contracts & Terms",
            "CT",
            YesNo,
        ),
        q(
            "CT_06",
            "If contract changes are you notified? How far ahead?",
            "Contracts & Terms",
            "CT",
            LongText,
        ),
        // Health & Safety
        q(
            "HS_01",
            "Does work affect your physical or mental health?",
            "Health & Safety",
            "HS",
            YesNo,
        ),
        q(
            "HS_02",
            "Does the platform take steps to address health risks?",
            "Health & Safety",
            "HS",
            YesNo,
        ),
        q(
            "HS_03",
            "Did you receive safety training?",
            "Health & Safety",
            "HS",
            YesNo,
        ),
        q(
            "HS_04",
            "Does platform provide insurance? What does it cover?",
            "Health & Safety",
            "HS",
            LongText,
        ),
        // Data & Privacy
        q(
            "DP_01",
            "What data does the platform collect about you?",
            "Data & Privacy",
            "DP",
            LongText,
        ),
        q(
            "DP_02",
            "Does platform inform you about data collection?",
            "Data & Privacy",
            "DP",
            YesNo,
        ),
        q(
            "DP_03",
            "What measures protect your data?",
            "Data & Privacy",
            "DP",
            LongText,
        ),
        // Platform Management
        q(
            "PM_01",
            "How does the rating system work?",
            "Platform Management",
            "PM",
            LongText,
        ),
        q(
            "PM_02",
            "Can you appeal a bad rating?",
            "Platform Management",
            "PM",
            YesNo,
        ),
        q(
            "PM_03",
            "Who do you contact when something goes wrong?",
            "Platform Management",
            "PM",
            LongText,
        ),
        q(
            "PM_04",
            "What channels exist for wage issues?",
            "Platform Management",
            "PM",
            LongText,
        ),
        // Support Experience
        q(
            "SE_01",
            "Have you contacted support before?",
            "Support Experience",
            "SE",
            YesNo,
        ),
        q(
            "SE_02",
            "What was the issue and how was it handled?",
            "Support Experience",
            "SE",
            LongText,
        ),
        // Due Process
        q(
            "DUE_01",
            "Have you experienced disciplinary action or deactivation?",
            "Due Process",
            "DUE",
            YesNo,
        ),
        q(
            "DUE_02",
            "How can you contest management decisions?",
            "Due Process",
            "DUE",
            LongText,
        ),
        q(
            "DUE_03",
            "Can you reach platform directly if there are supervisor problems?",
            "Due Process",
            "DUE",
            YesNo,
        ),
        // Discrimination
        q(
            "DIS_01",
            "Have you felt discriminated against based on your identity?",
            "Discrimination",
            "DIS",
            YesNo,
        ),
        q(
            "DIS_02",
            "Are there anti-discrimination policies?",
            "Discrimination",
            "DIS",
            YesNo,
        ),
        // Worker Voice
        q(
            "WV_01",
            "What say do you have in shaping platform policies?",
            "Worker Voice",
            "WV",
            LongText,
        ),
        q(
            "WV_02",
            "Are there collective mechanisms to empower workers?",
            "Worker Voice",
            "WV",
            YesNo,
        ),
        q(
            "WV_03",
            "What channels do workers use to share ideas collectively?",
            "Worker Voice",
            "WV",
            LongText,
        ),
        // Collective Action
        q(
            "CA_01",
            "Is there a worker group the platform recognizes?",
            "Collective Action",
            "CA",
            YesNo,
        ),
        q(
            "CA_02",
            "Can workers demonstrate strike or take collective action?",
            "Collective Action",
            "CA",
            YesNo,
        ),
        // Platform Comparison
        q(
            "PC_01",
            "How does this platform compare to others in the sector?",
            "Platform Comparison",
            "PC",
            LongText,
        ),
        q(
            "PC_02",
            "What one thing would you change about this platform?",
            "Platform Comparison",
            "PC",
            LongText,
        ),
        // Research Documentation
        q(
            "RD_01",
            "Key quotes and observations",
            "Research Documentation",
            "RD",
            LongText,
        ),
        q(
            "RD_02",
            "Interviewer reflections",
            "Research Documentation",
            "RD",
            LongText,
        ),
    ];

    Catalog::new(categories, questions)
});
