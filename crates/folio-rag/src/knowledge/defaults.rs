//! Built-in knowledge bases used when no configuration file overrides them

use crate::config::KnowledgeEntryConfig;

/// Widget fallback when no local entry matches
pub const ASSISTANT_FALLBACK_ANSWER: &str =
    "I recommend contacting Deepak directly at **deepak@example.com** for that specific inquiry.";

/// Answer service reply when no server rule matches
pub const SERVICE_DEFAULT_ANSWER: &str =
    "I am an AI assistant focused on Deepak's professional portfolio. I cannot answer unrelated questions.";

fn entry(aliases: &[&str], answer: &str) -> KnowledgeEntryConfig {
    KnowledgeEntryConfig {
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
        answer: answer.to_string(),
    }
}

/// Knowledge base bundled with the chat widget (local fallback path)
pub fn assistant_entries() -> Vec<KnowledgeEntryConfig> {
    vec![
        entry(
            &["What services do you offer?", "Services", "What can you do?"],
            "I specialize in **Machine Learning**, **NLP/LLMs**, **Computer Vision**, and **Data Science**. I can build custom AI models, chatbots, and intelligent automation systems for your business.",
        ),
        entry(
            &["Can you build a RAG system?", "RAG", "Retrieval Augmented Generation"],
            "Yes! I am an expert in building **Retrieval-Augmented Generation (RAG)** systems. I can connect your custom data (PDFs, Databases) to LLMs like GPT-4 or Llama to create intelligent knowledge assistants.",
        ),
        entry(
            &["What is your tech stack?", "Tools", "Technologies"],
            "I work with Python, PyTorch, TensorFlow, LangChain, OpenAI API, and Pinecone for AI. For web apps, I use React, Node.js, and modern cloud architecture.",
        ),
        entry(
            &["How can I contact you?", "Contact", "Hire you"],
            "You can reach me via email at **deepak@example.com** or connect with me on LinkedIn using the links in the footer. I'm open to freelance and contract work!",
        ),
    ]
}

/// Rules served by the answer service, in priority order
pub fn service_entries() -> Vec<KnowledgeEntryConfig> {
    vec![
        entry(
            &["services", "offer", "do"],
            "I specialize in **Machine Learning**, **NLP/LLMs**, **Computer Vision**, and **Data Science**. I can build custom AI models.",
        ),
        entry(
            &["rag", "retrieval"],
            "Yes! I am an expert in building **Retrieval-Augmented Generation (RAG)** systems connecting your data to LLMs.",
        ),
        entry(
            &["tech", "stack", "tools"],
            "I work with **Java**, **Python**, **TensorFlow**, **LangChain**, and **React**.",
        ),
        entry(
            &["contact", "hire", "email"],
            "You can reach me via email at **deepak@example.com** or on LinkedIn.",
        ),
        entry(
            &["hello", "hi"],
            "Hello! Please select a question below to learn more about Deepak.",
        ),
    ]
}
