//! Static security-hygiene question bank.

/// One multiple-choice question.
///
/// `correct` indexes into `options`; explanations are phrased so they read
/// correctly after both right and wrong answers.
#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub explanation: &'static str,
}

pub const QUESTION_BANK: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "You receive an email asking you to update your password. What do you do?",
        options: &[
            "Follow the link right away",
            "Check the sender and open the site manually",
            "Forward it to a friend to check",
        ],
        correct: 1,
        explanation: "Always verify the sender's address and enter credentials only on the official site.",
    },
    QuizQuestion {
        prompt: "Which password is the most secure?",
        options: &["123456", "qwerty", "H7$kL9!vRn2*"],
        correct: 2,
        explanation: "A strong password has at least 12 characters mixing digits and special symbols.",
    },
    QuizQuestion {
        prompt: "A site asks for the one-time code you just got by text message. When is it safe to enter it?",
        options: &[
            "Whenever the site looks trustworthy",
            "Only on the site that issued it, reached by typing the address yourself",
            "Never; one-time codes are only for support staff",
        ],
        correct: 1,
        explanation: "One-time codes belong only to the service that issued them; type the address yourself instead of following links.",
    },
    QuizQuestion {
        prompt: "What does the padlock (HTTPS) in the address bar guarantee?",
        options: &[
            "The site is run by a legitimate company",
            "The connection is encrypted, nothing more",
            "The site contains no malware",
        ],
        correct: 1,
        explanation: "HTTPS only encrypts the connection; phishing sites use it too, so the domain still has to be checked.",
    },
    QuizQuestion {
        prompt: "How should you manage passwords across sites?",
        options: &[
            "Reuse one strong password everywhere",
            "Use a unique password per site, ideally from a password manager",
            "Write them on a sticky note",
        ],
        correct: 1,
        explanation: "A unique password per site keeps one breach from unlocking every account.",
    },
];

pub const RECOMMENDATIONS: &[&str] = &[
    "🔹 Always use two-factor authentication",
    "🔹 Keep software and antivirus up to date",
    "🔹 Never reuse the same password",
    "🔹 Check for HTTPS in the address bar",
    "🔹 Back up your data",
];

pub const READ_MORE_URL: &str =
    "https://www.kaspersky.com/resource-center/preemptive-safety/top-10-preemptive-safety-rules-and-what-not-to-do-online";
