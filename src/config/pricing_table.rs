use crate::types::{Category, PriceRecord};

// USD per 1M tokens. Keep grouped by provider; the declared order is the default order.
pub static PRICE_TABLE: &[PriceRecord] = &[
    // OpenAI
    PriceRecord {
        provider: "OpenAI",
        name: "GPT-5",
        input_price: 10.00,
        output_price: 30.00,
        context_window: 256_000,
        category: Category::Reasoning,
        notes: "Latest flagship",
    },
    PriceRecord {
        provider: "OpenAI",
        name: "GPT-5-mini",
        input_price: 1.50,
        output_price: 6.00,
        context_window: 256_000,
        category: Category::Fast,
        notes: "Efficient",
    },
    PriceRecord {
        provider: "OpenAI",
        name: "GPT-4o",
        input_price: 2.50,
        output_price: 10.00,
        context_window: 128_000,
        category: Category::General,
        notes: "Multimodal",
    },
    PriceRecord {
        provider: "OpenAI",
        name: "GPT-4o-mini",
        input_price: 0.15,
        output_price: 0.60,
        context_window: 128_000,
        category: Category::Fast,
        notes: "Cheapest OpenAI",
    },
    PriceRecord {
        provider: "OpenAI",
        name: "GPT-4-turbo",
        input_price: 10.00,
        output_price: 30.00,
        context_window: 128_000,
        category: Category::General,
        notes: "Legacy",
    },
    PriceRecord {
        provider: "OpenAI",
        name: "o3",
        input_price: 10.00,
        output_price: 40.00,
        context_window: 200_000,
        category: Category::Reasoning,
        notes: "Chain-of-thought",
    },
    PriceRecord {
        provider: "OpenAI",
        name: "o3-mini",
        input_price: 1.10,
        output_price: 4.40,
        context_window: 200_000,
        category: Category::Reasoning,
        notes: "Efficient reasoning",
    },
    PriceRecord {
        provider: "OpenAI",
        name: "o4-mini",
        input_price: 1.10,
        output_price: 4.40,
        context_window: 200_000,
        category: Category::Reasoning,
        notes: "Latest reasoning",
    },

    // Anthropic
    PriceRecord {
        provider: "Anthropic",
        name: "Claude Opus 4",
        input_price: 15.00,
        output_price: 75.00,
        context_window: 200_000,
        category: Category::Reasoning,
        notes: "Flagship",
    },
    PriceRecord {
        provider: "Anthropic",
        name: "Claude Sonnet 4",
        input_price: 3.00,
        output_price: 15.00,
        context_window: 200_000,
        category: Category::General,
        notes: "Balanced",
    },
    PriceRecord {
        provider: "Anthropic",
        name: "Claude Haiku 4",
        input_price: 0.25,
        output_price: 1.25,
        context_window: 200_000,
        category: Category::Fast,
        notes: "Fastest Claude",
    },
    PriceRecord {
        provider: "Anthropic",
        name: "Claude Sonnet 3.5",
        input_price: 3.00,
        output_price: 15.00,
        context_window: 200_000,
        category: Category::General,
        notes: "Previous gen",
    },

    // Google
    PriceRecord {
        provider: "Google",
        name: "Gemini 2.5 Pro",
        input_price: 1.25,
        output_price: 10.00,
        context_window: 1_000_000,
        category: Category::Reasoning,
        notes: "1M context",
    },
    PriceRecord {
        provider: "Google",
        name: "Gemini 2.5 Flash",
        input_price: 0.15,
        output_price: 0.60,
        context_window: 1_000_000,
        category: Category::Fast,
        notes: "1M context, fast",
    },
    PriceRecord {
        provider: "Google",
        name: "Gemini 2.0 Flash",
        input_price: 0.10,
        output_price: 0.40,
        context_window: 1_000_000,
        category: Category::Fast,
        notes: "Cheapest 1M",
    },
    PriceRecord {
        provider: "Google",
        name: "Gemini 3 Pro",
        input_price: 2.50,
        output_price: 15.00,
        context_window: 2_000_000,
        category: Category::Reasoning,
        notes: "2M context",
    },

    // Meta
    PriceRecord {
        provider: "Meta",
        name: "Llama 3.3 70B",
        input_price: 0.60,
        output_price: 0.60,
        context_window: 128_000,
        category: Category::General,
        notes: "Open source",
    },
    PriceRecord {
        provider: "Meta",
        name: "Llama 3.1 405B",
        input_price: 3.00,
        output_price: 3.00,
        context_window: 128_000,
        category: Category::Reasoning,
        notes: "Open source, largest",
    },
    PriceRecord {
        provider: "Meta",
        name: "Llama 4 Scout",
        input_price: 0.15,
        output_price: 0.60,
        context_window: 512_000,
        category: Category::General,
        notes: "512K context",
    },
    PriceRecord {
        provider: "Meta",
        name: "Llama 4 Maverick",
        input_price: 0.30,
        output_price: 0.90,
        context_window: 256_000,
        category: Category::General,
        notes: "Open source",
    },

    // Mistral
    PriceRecord {
        provider: "Mistral",
        name: "Mistral Large",
        input_price: 2.00,
        output_price: 6.00,
        context_window: 128_000,
        category: Category::General,
        notes: "Flagship",
    },
    PriceRecord {
        provider: "Mistral",
        name: "Mistral Small",
        input_price: 0.10,
        output_price: 0.30,
        context_window: 128_000,
        category: Category::Fast,
        notes: "Budget",
    },
    PriceRecord {
        provider: "Mistral",
        name: "Codestral",
        input_price: 0.30,
        output_price: 0.90,
        context_window: 256_000,
        category: Category::General,
        notes: "Code-focused",
    },

    // DeepSeek
    PriceRecord {
        provider: "DeepSeek",
        name: "DeepSeek-V3",
        input_price: 0.27,
        output_price: 1.10,
        context_window: 128_000,
        category: Category::General,
        notes: "Very cheap",
    },
    PriceRecord {
        provider: "DeepSeek",
        name: "DeepSeek-R1",
        input_price: 0.55,
        output_price: 2.19,
        context_window: 128_000,
        category: Category::Reasoning,
        notes: "Reasoning, cheap",
    },

    // xAI
    PriceRecord {
        provider: "xAI",
        name: "Grok-3",
        input_price: 3.00,
        output_price: 15.00,
        context_window: 131_072,
        category: Category::Reasoning,
        notes: "xAI flagship",
    },
    PriceRecord {
        provider: "xAI",
        name: "Grok-3 Mini",
        input_price: 0.30,
        output_price: 0.50,
        context_window: 131_072,
        category: Category::Fast,
        notes: "Efficient",
    },

    // Cohere
    PriceRecord {
        provider: "Cohere",
        name: "Command R+",
        input_price: 2.50,
        output_price: 10.00,
        context_window: 128_000,
        category: Category::General,
        notes: "RAG-optimized",
    },
    PriceRecord {
        provider: "Cohere",
        name: "Command R",
        input_price: 0.15,
        output_price: 0.60,
        context_window: 128_000,
        category: Category::Fast,
        notes: "Budget RAG",
    },

    // Zhipu
    PriceRecord {
        provider: "Zhipu",
        name: "GLM-5",
        input_price: 1.00,
        output_price: 4.00,
        context_window: 128_000,
        category: Category::Reasoning,
        notes: "Chinese flagship",
    },

    // Moonshot
    PriceRecord {
        provider: "Moonshot",
        name: "Kimi K2.5",
        input_price: 0.50,
        output_price: 2.00,
        context_window: 256_000,
        category: Category::General,
        notes: "256K context",
    },

    // ByteDance
    PriceRecord {
        provider: "ByteDance",
        name: "Doubao Pro",
        input_price: 0.40,
        output_price: 1.20,
        context_window: 128_000,
        category: Category::General,
        notes: "ByteDance",
    },

    // Alibaba
    PriceRecord {
        provider: "Alibaba",
        name: "Qwen-Max",
        input_price: 1.60,
        output_price: 6.40,
        context_window: 128_000,
        category: Category::Reasoning,
        notes: "Alibaba flagship",
    },
    PriceRecord {
        provider: "Alibaba",
        name: "Qwen-Plus",
        input_price: 0.40,
        output_price: 1.20,
        context_window: 128_000,
        category: Category::General,
        notes: "Budget Qwen",
    },
];
