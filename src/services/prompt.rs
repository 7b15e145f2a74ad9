use crate::error::AppError;
use crate::services::gemini::TextModel;

/// Validate a prompt, ask the model, and classify the outcome.
pub async fn answer(model: &dyn TextModel, raw_prompt: &str) -> Result<String, AppError> {
    let prompt = raw_prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::EmptyPrompt);
    }

    let text = model.generate(prompt).await?;
    if text.is_empty() {
        return Err(AppError::NoResponse);
    }

    Ok(text)
}
