#[cfg(test)]
mod tests {
    use crate::{
        bank::{
            models::{QuestionBank, QuestionDraft, QuestionRecord, SetupCategory, SetupRequest},
            store::{BankStore, BankStoreError},
        },
        config::config::GameLimits,
        game::error::GameError,
    };

    fn draft(question: &str, answer: &str, points: Option<&str>) -> QuestionDraft {
        QuestionDraft {
            question: question.into(),
            answer: answer.into(),
            points: points.map(String::from),
        }
    }

    fn setup(categories: &[&str]) -> SetupRequest {
        SetupRequest {
            categories: categories
                .iter()
                .map(|name| SetupCategory {
                    name: name.to_string(),
                    questions: vec![
                        draft("Q1", "A1", Some("100")),
                        draft("Q2", "A2", Some("")),
                        draft("Q3", "A3", None),
                    ],
                })
                .collect(),
        }
    }

    #[test]
    fn setup_pads_categories_and_defaults_points() {
        let bank = QuestionBank::from_setup(setup(&["History", "Science"]), &GameLimits::default())
            .unwrap();

        let names: Vec<_> = bank.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["History", "Science"]);

        let history = &bank.categories()[0];
        assert_eq!(history.questions.len(), 7);
        assert_eq!(history.questions[0].points, 100);
        assert_eq!(history.questions[1].points, 0);
        assert_eq!(history.questions[2].points, 0);
        assert_eq!(history.questions[6], QuestionRecord::default());
    }

    #[test]
    fn setup_rejects_bad_points_and_category_counts() {
        let limits = GameLimits::default();

        let mut request = setup(&["History"]);
        request.categories[0].questions[0].points = Some("lots".into());
        assert!(matches!(
            QuestionBank::from_setup(request, &limits),
            Err(GameError::InvalidInput(_))
        ));

        let mut request = setup(&["History"]);
        request.categories[0].questions[0].points = Some("-100".into());
        assert!(matches!(
            QuestionBank::from_setup(request, &limits),
            Err(GameError::InvalidInput(_))
        ));

        assert!(matches!(
            QuestionBank::from_setup(setup(&[]), &limits),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            QuestionBank::from_setup(setup(&["a", "b", "c", "d", "e", "f"]), &limits),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            QuestionBank::from_setup(setup(&["History", "History"]), &limits),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            QuestionBank::from_setup(setup(&[" "]), &limits),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn json_keeps_category_and_question_order() {
        let raw = r#"{
            "Zoology": [{"question": "Z1", "answer": "a", "points": 300}],
            "Art": [
                {"question": "A1", "answer": "b", "points": 100},
                {"question": "A2", "answer": "c"}
            ],
            "Music": []
        }"#;

        let bank: QuestionBank = serde_json::from_str(raw).unwrap();
        let names: Vec<_> = bank.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zoology", "Art", "Music"]);
        assert_eq!(bank.categories()[1].questions[1].points, 0);

        let saved = serde_json::to_string(&bank).unwrap();
        let reloaded: QuestionBank = serde_json::from_str(&saved).unwrap();
        assert_eq!(bank, reloaded);
        assert!(saved.find("Zoology").unwrap() < saved.find("Art").unwrap());
        assert!(saved.find("Art").unwrap() < saved.find("Music").unwrap());
    }

    #[test]
    fn json_rejects_duplicate_categories() {
        let raw = r#"{"Art": [], "Art": []}"#;
        assert!(serde_json::from_str::<QuestionBank>(raw).is_err());
    }

    #[test]
    fn pad_keeps_extra_questions() {
        let raw = r#"{"Art": [
            {"question": "1", "answer": "1"}, {"question": "2", "answer": "2"},
            {"question": "3", "answer": "3"}, {"question": "4", "answer": "4"},
            {"question": "5", "answer": "5"}, {"question": "6", "answer": "6"},
            {"question": "7", "answer": "7"}, {"question": "8", "answer": "8"}
        ], "Music": [{"question": "1", "answer": "1", "points": 50}]}"#;

        let mut bank: QuestionBank = serde_json::from_str(raw).unwrap();
        bank.pad_to(7);

        assert_eq!(bank.categories()[0].questions.len(), 8);
        assert_eq!(bank.categories()[0].questions[7].question, "8");
        assert_eq!(bank.categories()[1].questions.len(), 7);
        assert_eq!(bank.categories()[1].questions[0].points, 50);
    }

    #[test]
    fn edit_question_replaces_one_slot() {
        let mut bank =
            QuestionBank::from_setup(setup(&["History"]), &GameLimits::default()).unwrap();

        bank.edit_question("History", 4, draft("New", "Answer", Some("400")))
            .unwrap();
        assert_eq!(
            bank.categories()[0].questions[4],
            QuestionRecord {
                question: "New".into(),
                answer: "Answer".into(),
                points: 400,
            }
        );

        assert!(matches!(
            bank.edit_question("History", 9, draft("x", "y", None)),
            Err(GameError::NotFound(_))
        ));
        assert!(matches!(
            bank.edit_question("Art", 0, draft("x", "y", None)),
            Err(GameError::NotFound(_))
        ));
        assert!(matches!(
            bank.edit_question("History", 0, draft("x", "y", Some("ten"))),
            Err(GameError::InvalidInput(_))
        ));
        assert_eq!(bank.categories()[0].questions[0].question, "Q1");
    }

    #[tokio::test]
    async fn store_round_trips_banks() {
        let dir = tempfile::tempdir().unwrap();
        let store = BankStore::new(dir.path().join("banks"));

        assert!(store.list().await.unwrap().is_empty());

        let bank = QuestionBank::from_setup(setup(&["History", "Science"]), &GameLimits::default())
            .unwrap();
        store.save("friday-night", &bank).await.unwrap();
        store.save("quiz_2", &bank).await.unwrap();

        let loaded = store.load("friday-night", 7).await.unwrap();
        assert_eq!(loaded, bank);
        assert_eq!(store.list().await.unwrap(), vec!["friday-night", "quiz_2"]);
    }

    #[tokio::test]
    async fn store_pads_short_files_and_rejects_bad_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = BankStore::new(dir.path());

        tokio::fs::write(
            dir.path().join("short.json"),
            r#"{"Art": [{"question": "Q", "answer": "A"}]}"#,
        )
        .await
        .unwrap();

        let bank = store.load("short", 7).await.unwrap();
        assert_eq!(bank.categories()[0].questions.len(), 7);
        assert_eq!(bank.categories()[0].questions[0].points, 0);

        assert!(matches!(
            store.load("missing", 7).await,
            Err(BankStoreError::NotFound(_))
        ));
        assert!(matches!(
            store.load("../etc/passwd", 7).await,
            Err(BankStoreError::InvalidName(_))
        ));
        assert!(matches!(
            store.save("", &bank).await,
            Err(BankStoreError::InvalidName(_))
        ));
    }
}
