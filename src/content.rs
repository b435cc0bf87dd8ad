//! Static copy for the page sections.

pub const DOCTOR_NAME: &str = "Dra. Aline Foganholi";
pub const TAGLINE: &str = "ODONTOLOGIA DE EXCELÊNCIA";
pub const PROFILE_PHOTO: &str = "/assets/dra-aline-profile.jpeg";

pub struct Specialty {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: [&'static str; 4],
}

pub struct Testimonial {
    pub name: &'static str,
    pub treatment: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const HERO_STATS: [(&str, &str); 3] = [
    ("8+", "Anos de Experiência"),
    ("500+", "Sorrisos Criados"),
    ("5★", "Avaliação Média"),
];

pub const SPECIALTIES: [Specialty; 4] = [
    Specialty {
        icon: "✦",
        title: "Odontologia Estética",
        description: "Transformamos sorrisos com técnicas avançadas de estética dental, criando harmonia e naturalidade.",
        benefits: ["Lentes de contato dental", "Facetas em porcelana", "Clareamento profissional", "Design do sorriso"],
    },
    Specialty {
        icon: "⛨",
        title: "Reabilitação Oral",
        description: "Restauramos função e estética com tratamentos completos e personalizados para cada paciente.",
        benefits: ["Implantes dentários", "Próteses fixas", "Reabilitação completa", "Planejamento digital"],
    },
    Specialty {
        icon: "♥",
        title: "Harmonização Orofacial",
        description: "Realçamos a beleza natural do rosto com procedimentos minimamente invasivos e resultados naturais.",
        benefits: ["Preenchimento labial", "Toxina botulínica", "Bioestimuladores", "Fios de sustentação"],
    },
    Specialty {
        icon: "☺",
        title: "Tratamento de DTM",
        description: "Cuidamos da saúde da articulação temporomandibular com abordagem multidisciplinar especializada.",
        benefits: ["Diagnóstico preciso", "Placas oclusais", "Terapia especializada", "Alívio da dor"],
    },
];

pub const ABOUT_HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        icon: "🏅",
        title: "Formação de Excelência",
        text: "Especialização em Prótese Dentária e DTM com constante atualização em técnicas avançadas.",
    },
    Highlight {
        icon: "🤝",
        title: "Cuidado Humanizado",
        text: "Atendimento personalizado que prioriza o conforto e bem-estar de cada paciente.",
    },
    Highlight {
        icon: "📖",
        title: "Educação Continuada",
        text: "Sempre em busca das mais modernas técnicas e tecnologias da odontologia mundial.",
    },
    Highlight {
        icon: "♥",
        title: "Paixão pela Profissão",
        text: "Cada caso é tratado com dedicação especial, buscando sempre a excelência nos resultados.",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Maria S.",
        treatment: "Reabilitação Oral",
        text: "A Dra. Aline não apenas restaurou meu sorriso, mas minha autoestima. Uma experiência transformadora, do início ao fim.",
        rating: 5,
    },
    Testimonial {
        name: "João P.",
        treatment: "Tratamento de DTM",
        text: "Anos de dor resolvidos com uma abordagem humana e tecnologia de ponta. O cuidado e a atenção aos detalhes são incomparáveis.",
        rating: 5,
    },
    Testimonial {
        name: "Ana C.",
        treatment: "Estética do Sorriso",
        text: "O resultado foi uma obra de arte. Natural, elegante e exatamente como eu sonhava. Recomendo a todos que buscam excelência.",
        rating: 5,
    },
];

pub const FAQS: [Faq; 4] = [
    Faq {
        question: "Como é a experiência da primeira consulta?",
        answer: "Sua primeira consulta é uma imersão de 60 minutos dedicada a entender profundamente suas aspirações e necessidades. Realizamos um diagnóstico digital completo e co-criamos um plano de tratamento exclusivo para você.",
    },
    Faq {
        question: "Quais tecnologias são utilizadas nos tratamentos?",
        answer: "Empregamos o que há de mais avançado na odontologia digital, incluindo scanners intraorais, planejamento 3D e materiais biocompatíveis de alta performance para garantir precisão, conforto e resultados duradouros.",
    },
    Faq {
        question: "Existem opções de financiamento para os tratamentos?",
        answer: "Sim, oferecemos planos de pagamento flexíveis e personalizados para viabilizar sua jornada de transformação. Nossa equipe de concierge terá o prazer de apresentar as melhores opções.",
    },
    Faq {
        question: "Qual a durabilidade dos tratamentos estéticos?",
        answer: "Nossos tratamentos são projetados para a longevidade. Com os cuidados e manutenções recomendados, seu novo sorriso manterá a beleza e a função por muitos anos.",
    },
];

/// Options of the treatment select. The stored value is the label itself so
/// the composed message reads naturally.
pub const TREATMENTS: [&str; 5] = [
    "Odontologia Estética",
    "Reabilitação Oral",
    "Harmonização Orofacial",
    "Tratamento de DTM",
    "Consulta de Avaliação",
];
