// hackhub-service/src/store/seed.rs
//
// Mock dataset for the in-memory backend, mirroring the demo content of the
// ХакХаб application.
use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Hackathon, Prize, ScheduleItem, Team, TeamSize, User};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 10, 0, 0)
        .single()
        .expect("valid seed date")
}

fn user(
    id: &str,
    name: &str,
    email: &str,
    bio: &str,
    tags: &[&str],
    location: &str,
    github: &str,
    skills: &[&str],
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        bio: bio.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        photo_url: format!("https://randomuser.me/api/portraits/lego/{}.jpg", id),
        created_at: date(2023, 1, 15),
        location: Some(location.to_string()),
        github: Some(github.to_string()),
        website: Some(format!("https://{}.dev", github)),
        skills: Some(skills.iter().map(|s| s.to_string()).collect()),
        invitations: Vec::new(),
        password_hash: None,
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(
            "1",
            "Алексей Иванов",
            "alexey@example.com",
            "Инженер машинного обучения с опытом работы в области ИИ и анализа данных.",
            &["Python", "ML", "TensorFlow"],
            "Санкт-Петербург",
            "alexeyi",
            &["Python", "Machine Learning", "TensorFlow", "SQL"],
        ),
        user(
            "2",
            "Семён Волков",
            "semyon@example.com",
            "Специалист по данным, увлечённый выявлением ценных идей из сложных наборов данных.",
            &["Data Science", "R", "Python"],
            "Москва",
            "svolkov",
            &["Python", "R", "SQL", "Tableau"],
        ),
        user(
            "3",
            "Татьяна Козлова",
            "tatyana@example.com",
            "Исследователь ИИ, работающий над системами глубокого обучения для компьютерного зрения.",
            &["NLP", "Computer Vision", "Deep Learning"],
            "Новосибирск",
            "tkozlova",
            &["PyTorch", "TensorFlow", "NLP", "CUDA"],
        ),
        user(
            "4",
            "Дмитрий Соколов",
            "dmitry@example.com",
            "Full-stack разработчик с опытом создания масштабируемых веб-приложений.",
            &["JavaScript", "React", "Node.js"],
            "Казань",
            "dsokolov",
            &["TypeScript", "React", "Node.js", "GraphQL"],
        ),
        user(
            "5",
            "Екатерина Орлова",
            "ekaterina@example.com",
            "Продуктовый дизайнер, проектирую интерфейсы, которые решают реальные задачи.",
            &["UX", "UI", "Figma"],
            "Екатеринбург",
            "eorlova",
            &["Figma", "Prototyping", "User Research"],
        ),
        user(
            "6",
            "Роман Чернов",
            "roman@example.com",
            "Backend-разработчик, строю надёжные распределённые системы и API.",
            &["Rust", "Go", "Distributed Systems"],
            "Москва",
            "rchernov",
            &["Rust", "Go", "PostgreSQL", "Kubernetes"],
        ),
    ]
}

pub fn hackathons() -> Vec<Hackathon> {
    vec![
        Hackathon {
            id: "1".to_string(),
            name: "Глобальный хакатон инноваций в ИИ".to_string(),
            description: "Присоединяйтесь к крупнейшему хакатону по искусственному интеллекту \
                          и создавайте решения, которые будут формировать будущее ИИ."
                .to_string(),
            start_date: date(2025, 9, 15),
            end_date: date(2025, 9, 18),
            location: "Онлайн".to_string(),
            tags: vec![
                "ИИ".to_string(),
                "Машинное обучение".to_string(),
                "Инновации".to_string(),
            ],
            image_url: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31".to_string(),
            organizer_name: "Альянс ИИ".to_string(),
            organizer_logo: "https://cdn-icons-png.flaticon.com/512/4372/4372820.png".to_string(),
            team_size: TeamSize { min: 2, max: 5 },
            website: Some("https://example.com/ai-hackathon".to_string()),
            prizes: Some(vec![
                Prize {
                    place: "1-е место".to_string(),
                    description: "Денежный приз 750 000 ₽ + кредиты для вычислений ИИ".to_string(),
                },
                Prize {
                    place: "2-е место".to_string(),
                    description: "Денежный приз 375 000 ₽ + возможности менторства".to_string(),
                },
            ]),
            schedule: Some(vec![
                ScheduleItem {
                    date: "2025-09-15".to_string(),
                    time: "10:00 - 11:00".to_string(),
                    title: "Церемония открытия".to_string(),
                    description: "Приветственное обращение и введение в задачи хакатона."
                        .to_string(),
                },
                ScheduleItem {
                    date: "2025-09-15".to_string(),
                    time: "11:30 - 12:30".to_string(),
                    title: "Формирование команд".to_string(),
                    description: "Знакомство участников и сбор команд.".to_string(),
                },
            ]),
        },
        Hackathon {
            id: "2".to_string(),
            name: "ЭкоТех: хакатон устойчивого развития".to_string(),
            description: "Создавайте технологии, которые помогают бороться с изменением климата \
                          и способствуют устойчивому развитию."
                .to_string(),
            start_date: date(2026, 10, 5),
            end_date: date(2026, 10, 7),
            location: "Москва".to_string(),
            tags: vec![
                "ЭкоТехнологии".to_string(),
                "IoT".to_string(),
                "Устойчивое развитие".to_string(),
            ],
            image_url: "https://images.unsplash.com/photo-1472214103451-9374bd1c798e".to_string(),
            organizer_name: "Зелёное будущее".to_string(),
            organizer_logo: "https://cdn-icons-png.flaticon.com/512/2913/2913520.png".to_string(),
            team_size: TeamSize { min: 2, max: 4 },
            website: None,
            prizes: None,
            schedule: None,
        },
        Hackathon {
            id: "3".to_string(),
            name: "Хакатон цифрового здравоохранения".to_string(),
            description: "Разрабатывайте решения для клиник, пациентов и врачей вместе с \
                          ведущими экспертами отрасли."
                .to_string(),
            start_date: date(2023, 11, 12),
            end_date: date(2023, 11, 14),
            location: "Санкт-Петербург".to_string(),
            tags: vec![
                "Здравоохранение".to_string(),
                "ИИ".to_string(),
                "Мобильная разработка".to_string(),
            ],
            image_url: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d".to_string(),
            organizer_name: "МедТех Россия".to_string(),
            organizer_logo: "https://cdn-icons-png.flaticon.com/512/2966/2966327.png".to_string(),
            team_size: TeamSize { min: 1, max: 4 },
            website: None,
            prizes: None,
            schedule: None,
        },
    ]
}

pub fn teams(users: &[User]) -> Vec<Team> {
    let member = |id: &str| -> User {
        users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .expect("seed team member exists")
    };

    vec![
        Team {
            id: "1".to_string(),
            hackathon_id: "1".to_string(),
            name: "Волшебники данных".to_string(),
            description: "Команда специалистов по данным и инженеров машинного обучения, \
                          создающих инструменты ИИ нового поколения."
                .to_string(),
            tags: vec![
                "Python".to_string(),
                "TensorFlow".to_string(),
                "NLP".to_string(),
            ],
            members: vec![member("1"), member("2"), member("3")],
            max_members: 5,
            created_by: "1".to_string(),
            created_at: date(2025, 8, 1),
        },
        Team {
            id: "2".to_string(),
            hackathon_id: "2".to_string(),
            name: "ЭкоРешения".to_string(),
            description: "Увлечены созданием технологий, которые помогают бороться с изменением \
                          климата."
                .to_string(),
            tags: vec!["ЭкоТехнологии".to_string(), "IoT".to_string()],
            members: vec![member("4"), member("5")],
            max_members: 4,
            created_by: "4".to_string(),
            created_at: date(2026, 8, 15),
        },
    ]
}
