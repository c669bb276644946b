//! The `psysurvey init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing("psysurvey.toml", SAMPLE_CONFIG)?;
    write_if_missing("psychology_questions.txt", SAMPLE_QUESTIONS)?;

    println!("\nNext steps:");
    println!("  1. Edit psychology_questions.txt (one `question|answer,answer` per line)");
    println!("  2. Run: psysurvey validate");
    println!("  3. Run: psysurvey take");

    Ok(())
}

fn write_if_missing(path: &str, content: &str) -> Result<()> {
    if Path::new(path).exists() {
        println!("{path} already exists, skipping.");
    } else {
        std::fs::write(path, content)?;
        println!("Created {path}");
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# psysurvey configuration

questions_file = "psychology_questions.txt"
title = "Опрос по психологии"
next_label = "Далее"
max_answers = 5
output_dir = "./survey-results"

[labels]
heading = "Результаты опроса:"
your_answer = "Ваш ответ:"
points_for_answer = "Баллы за ответ:"
unanswered = "Вы не ответили на этот вопрос"
total = "Итоговые баллы:"
"#;

const SAMPLE_QUESTIONS: &str = "Как часто вы чувствуете усталость в течение дня?|Никогда,Редко,Иногда,Часто,Постоянно\n\
Насколько легко вам заснуть вечером?|Очень легко,Легко,Средне,Трудно,Очень трудно\n\
Как часто вы откладываете важные дела?|Никогда,Редко,Иногда,Часто\n\
Насколько вы довольны своим общением с окружающими?|Полностью,В основном,Отчасти,Не доволен\n\
Вы предпочитаете утро или вечер?|Утро,Вечер\n\
";
