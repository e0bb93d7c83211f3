//! # Content 模块
//!
//! 站点的静态内容：个人信息、技能、项目、经历、教育背景。
//!
//! 内容在编译期写死；需要随语言切换的文本使用 [`Localized`]。
//! 可选的图片缺失时由 [`ImageSource::Placeholder`] 兜底，永远不是错误。

use std::collections::BTreeSet;

use crate::preferences::Locale;

/// 双语文本
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub es: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub const fn new(es: &'static str, en: &'static str) -> Self {
        Self { es, en }
    }

    /// 两种语言相同的文本
    pub const fn same(text: &'static str) -> Self {
        Self { es: text, en: text }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Es => self.es,
            Locale::En => self.en,
        }
    }
}

/// 社交链接
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    /// 图标名，也用作 aria-label
    pub kind: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// 熟练度 (0 - 100)
    pub level: u8,
    pub description: Localized,
}

/// 技能分类，`key` 对应翻译表 `skills.categories` 下的键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub key: &'static str,
    pub skills: &'static [Skill],
}

/// 展开后的单个技能（跑马灯中的一个图标）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillChip {
    pub skill: &'static Skill,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: Localized,
    pub technologies: &'static [&'static str],
    pub image: Option<&'static str>,
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
    pub featured: bool,
}

impl Project {
    pub fn image_source(&self) -> ImageSource {
        ImageSource::from_optional(self.image, self.title)
    }
}

/// 起止年份，`end` 为 `None` 表示至今
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: u16,
    pub end: Option<u16>,
}

impl Period {
    pub const fn new(start: u16, end: Option<u16>) -> Self {
        Self { start, end }
    }

    /// 显示文本，`present` 来自翻译表
    pub fn display(&self, present: &str) -> String {
        match self.end {
            Some(end) => format!("{} - {}", self.start, end),
            None => format!("{} - {}", self.start, present),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: Period,
    pub description: Localized,
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub institution: &'static str,
    pub degree: Localized,
    pub period: Period,
    pub location: &'static str,
}

/// 语言能力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpokenLanguage {
    pub name: Localized,
    pub level: Localized,
}

/// 个人资料
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: Localized,
    pub location: &'static str,
    pub email: &'static str,
    pub avatar: Option<&'static str>,
    pub social: &'static [SocialLink],
    pub bio: &'static [Localized],
    pub skills: &'static [SkillCategory],
    pub projects: &'static [Project],
    pub experience: &'static [Experience],
    pub education: &'static [Education],
    pub languages: &'static [SpokenLanguage],
}

/// 图片来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Image(&'static str),
    /// 没有图片时显示首字母
    Placeholder(String),
}

impl ImageSource {
    pub fn from_optional(src: Option<&'static str>, name: &str) -> Self {
        match src {
            Some(src) if !src.trim().is_empty() => ImageSource::Image(src),
            _ => ImageSource::Placeholder(initials(name)),
        }
    }
}

/// 每个单词的首字母
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// 按 `i mod rows` 把元素分到若干行
pub fn split_into_rows<T: Clone>(items: &[T], rows: usize) -> Vec<Vec<T>> {
    let rows = rows.max(1);
    let mut out: Vec<Vec<T>> = vec![Vec::new(); rows];
    for (i, item) in items.iter().enumerate() {
        out[i % rows].push(item.clone());
    }
    out
}

/// 关于区块的统计数字
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub projects: u32,
    pub years: u32,
    pub technologies: u32,
}

impl Profile {
    pub fn first_name(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }

    /// 地址的最后一段（国家）
    pub fn country(&self) -> &'static str {
        self.location
            .rsplit(',')
            .next()
            .map(str::trim)
            .unwrap_or(self.location)
    }

    pub fn avatar_source(&self) -> ImageSource {
        ImageSource::from_optional(self.avatar, self.name)
    }

    /// 页面会请求的全部图片路径（头像与项目图片）
    pub fn image_paths(&self) -> Vec<&'static str> {
        std::iter::once(self.avatar_source())
            .chain(self.projects.iter().map(Project::image_source))
            .filter_map(|source| match source {
                ImageSource::Image(src) => Some(src),
                ImageSource::Placeholder(_) => None,
            })
            .collect()
    }

    /// 例如 `Espanol (Nativo), Ingles (Conversacional (B2))`
    pub fn language_summary(&self, locale: Locale) -> String {
        self.languages
            .iter()
            .map(|l| format!("{} ({})", l.name.get(locale), l.level.get(locale)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn featured_projects(&self) -> Vec<&'static Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    /// 当前应显示的项目
    pub fn visible_projects(&self, show_all: bool) -> Vec<&'static Project> {
        if show_all {
            self.projects.iter().collect()
        } else {
            self.featured_projects()
        }
    }

    /// 是否需要"显示全部"按钮
    pub fn has_hidden_projects(&self) -> bool {
        self.projects.len() > self.featured_projects().len()
    }

    /// 按分类顺序展开的全部技能
    pub fn skill_chips(&self) -> Vec<SkillChip> {
        self.skills
            .iter()
            .flat_map(|category| {
                category.skills.iter().map(move |skill| SkillChip {
                    skill,
                    category: category.key,
                })
            })
            .collect()
    }

    /// 跑马灯的各行
    pub fn skill_rows(&self, rows: usize) -> Vec<Vec<SkillChip>> {
        split_into_rows(&self.skill_chips(), rows)
    }

    /// 最早一段经历到 `current_year` 的年数
    pub fn years_of_experience(&self, current_year: u16) -> u32 {
        self.experience
            .iter()
            .map(|e| e.period.start)
            .min()
            .map(|start| u32::from(current_year.saturating_sub(start)))
            .unwrap_or(0)
    }

    /// 不重复的技术数量（技能与项目标签合并计算）
    pub fn technology_count(&self) -> u32 {
        let mut names = BTreeSet::new();
        for chip in self.skill_chips() {
            names.insert(chip.skill.name);
        }
        for project in self.projects {
            names.extend(project.technologies.iter().copied());
        }
        names.len() as u32
    }

    pub fn stats(&self, current_year: u16) -> Stats {
        Stats {
            projects: self.projects.len() as u32,
            years: self.years_of_experience(current_year),
            technologies: self.technology_count(),
        }
    }

    /// 检查内容是否完整，返回问题列表
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("profile name is empty".to_string());
        }
        if !self.email.contains('@') {
            problems.push(format!("profile email '{}' is invalid", self.email));
        }
        for link in self.social {
            if !link.url.starts_with("https://") {
                problems.push(format!("social link '{}' is not https", link.kind));
            }
        }
        for category in self.skills {
            for skill in category.skills {
                if skill.level > 100 {
                    problems.push(format!("skill '{}' level {} > 100", skill.name, skill.level));
                }
            }
        }
        if self.featured_projects().is_empty() {
            problems.push("no featured project".to_string());
        }
        let mut titles = BTreeSet::new();
        for project in self.projects {
            if !titles.insert(project.title) {
                problems.push(format!("duplicate project title '{}'", project.title));
            }
            for url in [project.github, project.live].into_iter().flatten() {
                if !url.starts_with("https://") {
                    problems.push(format!("project '{}' link '{url}' is not https", project.title));
                }
            }
        }
        for exp in self.experience {
            if exp.period.end.is_some_and(|end| end < exp.period.start) {
                problems.push(format!("experience at '{}' ends before it starts", exp.company));
            }
        }
        problems
    }
}

// ========== 站点内容 ==========

const fn skill(name: &'static str, level: u8, es: &'static str, en: &'static str) -> Skill {
    Skill {
        name,
        level,
        description: Localized::new(es, en),
    }
}

pub static PROFILE: Profile = Profile {
    name: "Jorman Chuquer",
    title: Localized::new("Ingeniero de Software", "Software Engineer"),
    location: "Quito, Ecuador",
    email: "jorman240802@hotmail.com",
    avatar: None,
    social: &[
        SocialLink {
            kind: "github",
            url: "https://github.com/JorMath",
        },
        SocialLink {
            kind: "linkedin",
            url: "https://www.linkedin.com/in/jorman-chuquer-murillo-187096276/",
        },
        SocialLink {
            kind: "twitter",
            url: "https://x.com/Chromebtw",
        },
    ],
    bio: &[
        Localized::new(
            "Ingeniero de Software con experiencia desarrollando aplicaciones web escalables.",
            "Software Engineer with experience building scalable web applications.",
        ),
        Localized::new(
            "Apasionado por la arquitectura limpia, el codigo de calidad y las soluciones que generan impacto real y entregan valor.",
            "Passionate about clean architecture, quality code and solutions that create real impact and deliver value.",
        ),
        Localized::new(
            "Especializado en ecosistemas JavaScript/TypeScript, con experiencia en React.",
            "Specialized in the JavaScript/TypeScript ecosystem, with experience in React.",
        ),
    ],
    skills: &[
        SkillCategory {
            key: "languages",
            skills: &[
                skill(
                    "TypeScript",
                    95,
                    "JavaScript con tipos estaticos.",
                    "JavaScript with static types.",
                ),
                skill(
                    "JavaScript",
                    95,
                    "El lenguaje de la web.",
                    "The language of the web.",
                ),
                skill(
                    "Python",
                    80,
                    "Scripts, APIs y analisis de datos.",
                    "Scripting, APIs and data analysis.",
                ),
                skill(
                    "SQL",
                    85,
                    "Consultas y modelado relacional.",
                    "Relational queries and modelling.",
                ),
                skill(
                    "Java",
                    75,
                    "Aplicaciones orientadas a objetos.",
                    "Object-oriented applications.",
                ),
            ],
        },
        SkillCategory {
            key: "frontend",
            skills: &[
                skill(
                    "React",
                    95,
                    "Interfaces basadas en componentes.",
                    "Component-based interfaces.",
                ),
                skill(
                    "Next.js",
                    90,
                    "React con renderizado en servidor.",
                    "React with server rendering.",
                ),
                skill(
                    "Tailwind CSS",
                    90,
                    "Estilos utilitarios.",
                    "Utility-first styling.",
                ),
            ],
        },
        SkillCategory {
            key: "backend",
            skills: &[
                skill(
                    "Node.js",
                    90,
                    "JavaScript en el servidor.",
                    "JavaScript on the server.",
                ),
                skill(
                    "Express",
                    90,
                    "APIs HTTP minimalistas.",
                    "Minimal HTTP APIs.",
                ),
                skill(
                    "Django",
                    75,
                    "Framework web de Python.",
                    "Python web framework.",
                ),
            ],
        },
        SkillCategory {
            key: "devops",
            skills: &[
                skill(
                    "Docker",
                    85,
                    "Contenedores para cada entorno.",
                    "Containers for every environment.",
                ),
                skill(
                    "CI/CD",
                    85,
                    "Pruebas y despliegues automaticos.",
                    "Automated tests and deploys.",
                ),
            ],
        },
        SkillCategory {
            key: "databases",
            skills: &[
                skill(
                    "PostgreSQL",
                    90,
                    "Base de datos relacional.",
                    "Relational database.",
                ),
                skill(
                    "MongoDB",
                    85,
                    "Base de datos de documentos.",
                    "Document database.",
                ),
            ],
        },
        SkillCategory {
            key: "tools",
            skills: &[
                skill("Git", 95, "Control de versiones.", "Version control."),
                skill("VS Code", 95, "Editor de codigo.", "Code editor."),
                skill(
                    "Claude Code",
                    85,
                    "Asistente de programacion.",
                    "Coding assistant.",
                ),
                skill("Figma", 70, "Diseno de interfaces.", "Interface design."),
                skill(
                    "Linux",
                    85,
                    "Servidores y linea de comandos.",
                    "Servers and the command line.",
                ),
            ],
        },
    ],
    projects: &[
        Project {
            title: "Salinas Yuyay SI",
            description: Localized::new(
                "Sistema de gestion de informacion para el centro cultural comunitario Salinas Yuyay",
                "Information management system for the Salinas Yuyay community cultural center",
            ),
            technologies: &["Next.js", "Pocketbase", "Cloudflare R2", "Vercel", "Railway"],
            image: None,
            github: Some(
                "https://github.com/cristian-sangucho-a/salinas-yuyay-sistema-de-informacion",
            ),
            live: Some("https://salinas-yuyay-si.vercel.app/"),
            featured: true,
        },
        Project {
            title: "Task Management API",
            description: Localized::new(
                "API RESTful para gestion de tareas con autenticacion JWT, roles de usuario y notificaciones en tiempo real via WebSockets.",
                "RESTful task management API with JWT authentication, user roles and real-time notifications over WebSockets.",
            ),
            technologies: &["NestJS", "TypeScript", "MongoDB", "Socket.io", "Docker"],
            image: None,
            github: Some("https://github.com/juanperez/task-api"),
            live: None,
            featured: true,
        },
        Project {
            title: "Weather Dashboard",
            description: Localized::new(
                "Dashboard interactivo de clima con datos en tiempo real, graficos historicos y alertas personalizadas para ciudades de Ecuador.",
                "Interactive weather dashboard with real-time data, historical charts and custom alerts for cities in Ecuador.",
            ),
            technologies: &["Next.js", "Tailwind CSS", "Chart.js", "OpenWeather API"],
            image: None,
            github: Some("https://github.com/juanperez/weather-dash"),
            live: Some("https://weather-ec.vercel.app"),
            featured: true,
        },
        Project {
            title: "Chat en Tiempo Real",
            description: Localized::new(
                "Aplicacion de chat con soporte para grupos, mensajes multimedia y cifrado de extremo a extremo.",
                "Chat application with group support, media messages and end-to-end encryption.",
            ),
            technologies: &["React Native", "Firebase", "WebRTC", "TypeScript"],
            image: None,
            github: Some("https://github.com/juanperez/realtime-chat"),
            live: None,
            featured: false,
        },
        Project {
            title: "Portfolio CMS",
            description: Localized::new(
                "Sistema de gestion de contenido headless para portafolios con editor WYSIWYG y deploy automatico.",
                "Headless content management system for portfolios with a WYSIWYG editor and automatic deploys.",
            ),
            technologies: &["Vue.js", "Strapi", "GraphQL", "Vercel"],
            image: None,
            github: Some("https://github.com/juanperez/portfolio-cms"),
            live: None,
            featured: false,
        },
        Project {
            title: "DevOps Pipeline Tool",
            description: Localized::new(
                "Herramienta CLI para automatizar pipelines de CI/CD con integracion a GitHub Actions y AWS CodePipeline.",
                "CLI tool that automates CI/CD pipelines with GitHub Actions and AWS CodePipeline integration.",
            ),
            technologies: &["Go", "Docker", "AWS", "GitHub API"],
            image: None,
            github: Some("https://github.com/juanperez/pipeline-tool"),
            live: None,
            featured: false,
        },
    ],
    experience: &[
        Experience {
            company: "TechCorp Ecuador",
            role: "Senior Software Engineer",
            period: Period::new(2023, None),
            description: Localized::new(
                "Liderando el equipo de desarrollo frontend, implementando arquitectura de micro-frontends y mejorando la performance un 40%.",
                "Leading the frontend team, introducing a micro-frontend architecture and improving performance by 40%.",
            ),
            technologies: &["React", "TypeScript", "AWS", "Micro-frontends"],
        },
        Experience {
            company: "StartupXYZ",
            role: "Full Stack Developer",
            period: Period::new(2021, Some(2023)),
            description: Localized::new(
                "Desarrollo de la plataforma principal de la startup desde cero, alcanzando 50K usuarios activos mensuales.",
                "Built the startup's main platform from scratch, reaching 50K monthly active users.",
            ),
            technologies: &["Next.js", "Node.js", "PostgreSQL", "Docker"],
        },
        Experience {
            company: "Agencia Digital Quito",
            role: "Frontend Developer",
            period: Period::new(2019, Some(2021)),
            description: Localized::new(
                "Desarrollo de sitios web y aplicaciones para clientes corporativos, con enfoque en UX/UI y rendimiento.",
                "Built websites and applications for corporate clients with a focus on UX/UI and performance.",
            ),
            technologies: &["React", "Vue.js", "SCSS", "WordPress"],
        },
    ],
    education: &[
        Education {
            institution: "Escuela Politecnica Nacional",
            degree: Localized::new(
                "Ingenieria en Sistemas Informaticos y de Computacion",
                "Computer Systems Engineering",
            ),
            period: Period::new(2015, Some(2019)),
            location: "Quito, Ecuador",
        },
        Education {
            institution: "Udemy / Platzi",
            degree: Localized::new(
                "Certificaciones en Cloud Computing, DevOps y Arquitectura de Software",
                "Certifications in Cloud Computing, DevOps and Software Architecture",
            ),
            period: Period::new(2020, None),
            location: "Online",
        },
    ],
    languages: &[
        SpokenLanguage {
            name: Localized::new("Espanol", "Spanish"),
            level: Localized::new("Nativo", "Native"),
        },
        SpokenLanguage {
            name: Localized::new("Ingles", "English"),
            level: Localized::new("Conversacional (B2)", "Conversational (B2)"),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Jorman Chuquer"), "JC");
        assert_eq!(initials("  Task   Management API "), "TMA");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_image_source() {
        assert_eq!(
            ImageSource::from_optional(Some("/a.jpg"), "x"),
            ImageSource::Image("/a.jpg")
        );
        assert_eq!(
            ImageSource::from_optional(None, "Weather Dashboard"),
            ImageSource::Placeholder("WD".to_string())
        );
        assert_eq!(
            ImageSource::from_optional(Some(" "), "Portfolio CMS"),
            ImageSource::Placeholder("PC".to_string())
        );
    }

    #[test]
    fn test_images_are_bundled() {
        let assets = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../folio-web/assets");
        let missing: Vec<_> = PROFILE
            .image_paths()
            .into_iter()
            .filter(|src| !assets.join(src.trim_start_matches('/')).is_file())
            .collect();
        assert!(missing.is_empty(), "missing image assets: {missing:?}");
    }

    #[test]
    fn test_split_into_rows() {
        let rows = split_into_rows(&[0, 1, 2, 3, 4, 5, 6], 3);
        assert_eq!(rows, vec![vec![0, 3, 6], vec![1, 4], vec![2, 5]]);
        assert_eq!(split_into_rows::<u8>(&[], 3), vec![Vec::<u8>::new(); 3]);
    }

    #[test]
    fn test_profile_helpers() {
        assert_eq!(PROFILE.first_name(), "Jorman");
        assert_eq!(PROFILE.country(), "Ecuador");
        assert_eq!(
            PROFILE.language_summary(Locale::En),
            "Spanish (Native), English (Conversational (B2))"
        );
    }

    #[test]
    fn test_project_visibility() {
        assert_eq!(PROFILE.visible_projects(false).len(), 3);
        assert_eq!(PROFILE.visible_projects(true).len(), 6);
        assert!(PROFILE.has_hidden_projects());
        assert!(PROFILE.visible_projects(false).iter().all(|p| p.featured));
    }

    #[test]
    fn test_skill_rows_cover_every_skill() {
        let rows = PROFILE.skill_rows(3);
        assert_eq!(rows.len(), 3);
        let total: usize = rows.iter().map(Vec::len).sum();
        assert_eq!(total, PROFILE.skill_chips().len());
        assert_eq!(rows[0][0].skill.name, "TypeScript");
        assert_eq!(rows[1][0].skill.name, "JavaScript");
        assert_eq!(rows[0][0].category, "languages");
    }

    #[test]
    fn test_stats() {
        let stats = PROFILE.stats(2025);
        assert_eq!(stats.projects, 6);
        assert_eq!(stats.years, 6);
        assert!(stats.technologies >= 20);
    }

    #[test]
    fn test_period_display() {
        assert_eq!(Period::new(2023, None).display("Present"), "2023 - Present");
        assert_eq!(
            Period::new(2019, Some(2021)).display("Presente"),
            "2019 - 2021"
        );
    }

    #[test]
    fn test_content_is_valid() {
        assert_eq!(PROFILE.validate(), Vec::<String>::new());
    }
}
