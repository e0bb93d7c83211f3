//! # I18n 模块
//!
//! 西班牙语 / 英语两张静态翻译表。
//!
//! 表结构由 [`Translations`] 固定，两种语言的键集合因此天然一致；
//! [`Translations::keys`] 和 [`Translations::empty_keys`] 供 xtask 检查使用。

use serde::Serialize;
use serde_json::Value;

use crate::preferences::Locale;

/// 导航栏
#[derive(Debug, Serialize)]
pub struct NavText {
    pub home: &'static str,
    pub about: &'static str,
    pub skills: &'static str,
    pub projects: &'static str,
    pub experience: &'static str,
    pub contact: &'static str,
    pub light_mode: &'static str,
    pub dark_mode: &'static str,
    pub switch_to_light: &'static str,
    pub switch_to_dark: &'static str,
    pub open_menu: &'static str,
    pub close_menu: &'static str,
}

/// 首屏
#[derive(Debug, Serialize)]
pub struct HeroText {
    pub available: &'static str,
    pub cta: &'static str,
    /// 轮播文本（排在职位名之后）
    pub rotating_texts: &'static [&'static str],
}

/// 统计数字的标签
#[derive(Debug, Serialize)]
pub struct StatsText {
    pub projects: &'static str,
    pub years: &'static str,
    pub technologies: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AboutText {
    pub title: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub languages: &'static str,
    pub education: &'static str,
    pub stats: StatsText,
}

/// 技能分类名
#[derive(Debug, Serialize)]
pub struct SkillCategoryText {
    pub languages: &'static str,
    pub frontend: &'static str,
    pub backend: &'static str,
    pub devops: &'static str,
    pub databases: &'static str,
    pub tools: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SkillsText {
    pub title: &'static str,
    pub speed: &'static str,
    pub categories: SkillCategoryText,
}

impl SkillsText {
    /// 按分类键查找分类名，未知的键原样返回
    pub fn category<'a>(&self, key: &'a str) -> &'a str {
        let c = &self.categories;
        match key {
            "languages" => c.languages,
            "frontend" => c.frontend,
            "backend" => c.backend,
            "devops" => c.devops,
            "databases" => c.databases,
            "tools" => c.tools,
            other => other,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectsText {
    pub title: &'static str,
    pub code: &'static str,
    pub demo: &'static str,
    pub show_all: &'static str,
    pub show_less: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ExperienceText {
    pub title: &'static str,
    pub present: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ContactText {
    pub title: &'static str,
    pub talk_title: &'static str,
    pub talk_text: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
    pub send: &'static str,
    pub sending: &'static str,
    pub success: &'static str,
    pub error_default: &'static str,
    pub error_connection: &'static str,
    pub error_required: &'static str,
    pub error_email: &'static str,
    pub email_subject: &'static str,
    pub form_sender: &'static str,
    pub form_subject: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FooterText {
    pub made_with: &'static str,
    pub rights: &'static str,
}

/// 语言切换按钮
#[derive(Debug, Serialize)]
pub struct LangText {
    pub label: &'static str,
    pub switch_to: &'static str,
}

/// 一种语言的完整翻译表
#[derive(Debug, Serialize)]
pub struct Translations {
    pub nav: NavText,
    pub hero: HeroText,
    pub about: AboutText,
    pub skills: SkillsText,
    pub projects: ProjectsText,
    pub experience: ExperienceText,
    pub contact: ContactText,
    pub footer: FooterText,
    pub lang: LangText,
}

impl Translations {
    /// 获取某种语言的翻译表
    pub fn for_locale(locale: Locale) -> &'static Translations {
        match locale {
            Locale::Es => &ES,
            Locale::En => &EN,
        }
    }

    /// 所有叶子键（`section.key` 形式，数组元素带下标），按字母序
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.leaves().into_iter().map(|(key, _)| key).collect();
        keys.sort();
        keys
    }

    /// 值为空字符串的键
    pub fn empty_keys(&self) -> Vec<String> {
        self.leaves()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| key)
            .collect()
    }

    fn leaves(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        // 全是 &str 字段，序列化不会失败；万一失败就返回空列表
        if let Ok(value) = serde_json::to_value(self) {
            collect_leaves("", &value, &mut out);
        }
        out
    }
}

fn collect_leaves(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        }
    };
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                collect_leaves(&join(key), child, out);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                collect_leaves(&join(&i.to_string()), child, out);
            }
        }
        Value::String(s) => out.push((prefix.to_string(), s.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}

// ========== 西班牙语 ==========

pub static ES: Translations = Translations {
    nav: NavText {
        home: "Inicio",
        about: "Sobre Mi",
        skills: "Habilidades",
        projects: "Proyectos",
        experience: "Experiencia",
        contact: "Contacto",
        light_mode: "Modo Claro",
        dark_mode: "Modo Oscuro",
        switch_to_light: "Cambiar a modo claro",
        switch_to_dark: "Cambiar a modo oscuro",
        open_menu: "Abrir menu",
        close_menu: "Cerrar menu",
    },
    hero: HeroText {
        available: "Disponible para proyectos",
        cta: "Conoce mas",
        rotating_texts: &["MERN Stack Developer", "DJango Developer"],
    },
    about: AboutText {
        title: "Sobre Mi",
        location: "Ubicacion",
        email: "Email",
        languages: "Idiomas",
        education: "Educacion",
        stats: StatsText {
            projects: "Proyectos",
            years: "Anos de experiencia",
            technologies: "Tecnologias",
        },
    },
    skills: SkillsText {
        title: "Habilidades",
        speed: "VELOCIDAD",
        categories: SkillCategoryText {
            languages: "Lenguajes",
            frontend: "Frontend",
            backend: "Backend",
            devops: "DevOps",
            databases: "Bases de Datos",
            tools: "Herramientas",
        },
    },
    projects: ProjectsText {
        title: "Proyectos",
        code: "Codigo",
        demo: "Demo",
        show_all: "Ver todos",
        show_less: "Ver menos",
    },
    experience: ExperienceText {
        title: "Experiencia",
        present: "Presente",
    },
    contact: ContactText {
        title: "Contacto",
        talk_title: "Hablemos",
        talk_text: "Estoy disponible para proyectos freelance, colaboraciones o posiciones full-time. No dudes en contactarme.",
        name_label: "Nombre",
        name_placeholder: "Tu nombre",
        email_label: "Email",
        email_placeholder: "tu@email.com",
        message_label: "Mensaje",
        message_placeholder: "Cuentame sobre tu proyecto...",
        send: "Enviar mensaje",
        sending: "Enviando...",
        success: "Mensaje enviado con exito. Te respondere pronto!",
        error_default: "Hubo un error al enviar el mensaje.",
        error_connection: "Error de conexion. Intenta de nuevo mas tarde.",
        error_required: "Completa todos los campos.",
        error_email: "Ingresa un email valido.",
        email_subject: "Contacto desde Portafolio",
        form_sender: "Portafolio Web",
        form_subject: "Nuevo mensaje de",
    },
    footer: FooterText {
        made_with: "Disenado y desarrollado con dedicacion en",
        rights: "Todos los derechos reservados.",
    },
    lang: LangText {
        label: "ES",
        switch_to: "Cambiar idioma",
    },
};

// ========== 英语 ==========

pub static EN: Translations = Translations {
    nav: NavText {
        home: "Home",
        about: "About",
        skills: "Skills",
        projects: "Projects",
        experience: "Experience",
        contact: "Contact",
        light_mode: "Light Mode",
        dark_mode: "Dark Mode",
        switch_to_light: "Switch to light mode",
        switch_to_dark: "Switch to dark mode",
        open_menu: "Open menu",
        close_menu: "Close menu",
    },
    hero: HeroText {
        available: "Available for projects",
        cta: "Learn more",
        rotating_texts: &["MERN Stack Developer", "DJango Developer"],
    },
    about: AboutText {
        title: "About Me",
        location: "Location",
        email: "Email",
        languages: "Languages",
        education: "Education",
        stats: StatsText {
            projects: "Projects",
            years: "Years of experience",
            technologies: "Technologies",
        },
    },
    skills: SkillsText {
        title: "Skills",
        speed: "SPEED",
        categories: SkillCategoryText {
            languages: "Languages",
            frontend: "Frontend",
            backend: "Backend",
            devops: "DevOps",
            databases: "Databases",
            tools: "Tools",
        },
    },
    projects: ProjectsText {
        title: "Projects",
        code: "Code",
        demo: "Demo",
        show_all: "Show all",
        show_less: "Show less",
    },
    experience: ExperienceText {
        title: "Experience",
        present: "Present",
    },
    contact: ContactText {
        title: "Contact",
        talk_title: "Let's Talk",
        talk_text: "I'm available for freelance projects, collaborations, or full-time positions. Don't hesitate to reach out.",
        name_label: "Name",
        name_placeholder: "Your name",
        email_label: "Email",
        email_placeholder: "you@email.com",
        message_label: "Message",
        message_placeholder: "Tell me about your project...",
        send: "Send message",
        sending: "Sending...",
        success: "Message sent successfully. I'll get back to you soon!",
        error_default: "There was an error sending the message.",
        error_connection: "Connection error. Please try again later.",
        error_required: "Please fill in every field.",
        error_email: "Please enter a valid email.",
        email_subject: "Contact from Portfolio",
        form_sender: "Web Portfolio",
        form_subject: "New message from",
    },
    footer: FooterText {
        made_with: "Designed and developed with care in",
        rights: "All rights reserved.",
    },
    lang: LangText {
        label: "EN",
        switch_to: "Switch language",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_sets_match() {
        assert_eq!(ES.keys(), EN.keys());
        assert!(ES.keys().contains(&"contact.error_connection".to_string()));
        assert!(ES.keys().contains(&"hero.rotating_texts.1".to_string()));
    }

    #[test]
    fn test_no_empty_values() {
        assert!(ES.empty_keys().is_empty());
        assert!(EN.empty_keys().is_empty());
    }

    #[test]
    fn test_for_locale() {
        assert_eq!(Translations::for_locale(Locale::Es).nav.home, "Inicio");
        assert_eq!(Translations::for_locale(Locale::En).nav.home, "Home");
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(EN.skills.category("databases"), "Databases");
        assert_eq!(ES.skills.category("databases"), "Bases de Datos");
        assert_eq!(EN.skills.category("mobile"), "mobile");
    }
}
