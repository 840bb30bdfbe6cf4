//! Static quiz content: the five questions, the program catalog fed to the
//! recommendation service, and the admissions contact block.

use crate::model::{Program, Question, QuestionOption};

pub const QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        text: "Мектепте қай пәндер сізге көбірек ұнайды?",
        options: &[
            QuestionOption { id: "math", label: "Математика", emoji: "📐" },
            QuestionOption { id: "lang", label: "Тіл және әдебиет", emoji: "📚" },
            QuestionOption { id: "science", label: "Жаратылыстану", emoji: "🔬" },
            QuestionOption { id: "art", label: "Өнер", emoji: "🎨" },
        ],
    },
    Question {
        id: 2,
        text: "Бос уақытта немен айналысқанды ұнатасыз?",
        options: &[
            QuestionOption { id: "tech", label: "Технология", emoji: "💻" },
            QuestionOption { id: "people", label: "Адамдармен жұмыс", emoji: "🗣️" },
            QuestionOption { id: "research", label: "Зерттеу", emoji: "🔎" },
            QuestionOption { id: "creative", label: "Шығармашылық", emoji: "✨" },
        ],
    },
    Question {
        id: 3,
        text: "Сіздің ең мықты жағыңыз қандай?",
        options: &[
            QuestionOption { id: "logic", label: "Логика", emoji: "🧠" },
            QuestionOption { id: "communication", label: "Қарым-қатынас", emoji: "💬" },
            QuestionOption { id: "imagination", label: "Қиял", emoji: "🌈" },
            QuestionOption { id: "organizing", label: "Ұйымдастыру", emoji: "🗂️" },
        ],
    },
    Question {
        id: 4,
        text: "Қандай жұмыс форматы сізге ыңғайлы?",
        options: &[
            QuestionOption { id: "team", label: "Топпен", emoji: "👥" },
            QuestionOption { id: "solo", label: "Жеке", emoji: "🧘" },
            QuestionOption { id: "field", label: "Далада", emoji: "🌳" },
            QuestionOption { id: "office", label: "Кеңседе", emoji: "🏢" },
        ],
    },
    Question {
        id: 5,
        text: "Болашақта қай бағытта жұмыс істегіңіз келеді?",
        options: &[
            QuestionOption { id: "it", label: "IT", emoji: "🖥️" },
            QuestionOption { id: "education", label: "Білім беру", emoji: "🏫" },
            QuestionOption { id: "science", label: "Ғылым", emoji: "🧪" },
            QuestionOption { id: "media", label: "Медиа", emoji: "🎬" },
        ],
    },
];

pub const PROGRAMS: &[Program] = &[
    Program {
        code: "6B06101",
        name: "Информатика",
        description: "Бағдарламалау, деректер қоры және ақпараттық жүйелерді жобалау.",
        subject_combination: "Математика – Информатика",
        category: "IT",
    },
    Program {
        code: "6B01505",
        name: "Математика мұғалімін даярлау",
        description: "Мектеп математикасын оқыту әдістемесі және терең пәндік дайындық.",
        subject_combination: "Математика – Физика",
        category: "Білім беру",
    },
    Program {
        code: "6B01511",
        name: "Физика мұғалімін даярлау",
        description: "Физика және заманауи эксперименттік зертхана практикасы.",
        subject_combination: "Физика – Математика",
        category: "Білім беру",
    },
    Program {
        code: "6B01509",
        name: "Биология мұғалімін даярлау",
        description: "Тірі табиғат туралы ғылымдар және далалық зерттеу дағдылары.",
        subject_combination: "Биология – Химия",
        category: "Жаратылыстану",
    },
    Program {
        code: "6B01701",
        name: "Қазақ тілі мен әдебиеті",
        description: "Қазақ тілінің теориясы, әдебиеттану және мәтінмен жұмыс.",
        subject_combination: "Қазақ тілі – Қазақ әдебиеті",
        category: "Филология",
    },
    Program {
        code: "6B03101",
        name: "Психология",
        description: "Тұлға психологиясы, кеңес беру және зерттеу әдістері.",
        subject_combination: "Биология – География",
        category: "Әлеуметтік ғылымдар",
    },
    Program {
        code: "6B01601",
        name: "Тарих мұғалімін даярлау",
        description: "Дүниежүзі және Қазақстан тарихы, деректану негіздері.",
        subject_combination: "Дүниежүзі тарихы – География",
        category: "Гуманитарлық",
    },
    Program {
        code: "6B03201",
        name: "Журналистика",
        description: "Медиа өндіріс, цифрлық контент және редакциялық жұмыс.",
        subject_combination: "Қазақ тілі – Дүниежүзі тарихы",
        category: "Медиа",
    },
];

/// Admissions contact block shown on the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub address: &'static str,
    pub email: &'static str,
    pub phones: &'static [&'static str],
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    address: "Алматы қаласы, Достық даңғылы, 13",
    email: "info@abaiuniversity.edu.kz",
    phones: &["+7 (727) 291-07-58", "+7 (727) 291-57-85"],
};

/// The fixed, ordered question sequence.
#[must_use]
pub fn questions() -> &'static [Question] {
    QUESTIONS
}

/// The full program catalog supplied to the recommendation service.
#[must_use]
pub fn programs() -> &'static [Program] {
    PROGRAMS
}

/// Admissions contacts.
#[must_use]
pub fn contact_info() -> ContactInfo {
    CONTACT_INFO
}
