//! Extraction guidance for each entity kind.
//!
//! Hints an analyzer uses to recognize instances of a kind in source code and
//! documentation, with sample entities taken from a typical agent-tooling
//! codebase. Rendered into extraction prompts by [`crate::prompts`].

/// A sample entity of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityExample {
    pub name: &'static str,
    pub description: &'static str,
}

/// How to spot entities of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindGuidance {
    /// Identification hints, most important first
    pub instructions: &'static [&'static str],
    /// Sample entities
    pub examples: &'static [EntityExample],
}

const fn example(name: &'static str, description: &'static str) -> EntityExample {
    EntityExample { name, description }
}

pub static COMPONENT: KindGuidance = KindGuidance {
    instructions: &[
        "Look for the major architectural parts of the system",
        "Prefer large units with a clear, separable responsibility",
        "Pick the parts that deliver core functionality",
        "A component is usually built from several modules",
        "Components talk to each other through well-defined interfaces",
    ],
    examples: &[
        example("CLI Tool", "Command-line interface for managing projects"),
        example("MCP Server", "Model Context Protocol server implementation"),
        example("Docker Integration", "Container lifecycle management"),
    ],
};

pub static MODULE: KindGuidance = KindGuidance {
    instructions: &[
        "Look for directories or packages that implement one piece of functionality",
        "Group code that works together toward a single purpose",
        "A module normally lives inside a component",
        "Name modules by role, such as command handling or configuration management",
        "Modules are smaller than components and larger than single types",
    ],
    examples: &[
        example("Command Processor", "Parses and executes CLI commands"),
        example("Docker Compose Generator", "Generates docker-compose files"),
        example("Entity Registry", "Manages the registered entity types"),
    ],
};

pub static INTERFACE: KindGuidance = KindGuidance {
    instructions: &[
        "Look for APIs, protocols and contracts between parts of the system",
        "Focus on boundaries where data or control crosses between components",
        "REST endpoints, function signatures and CLI commands all qualify",
        "Record what data or parameters pass through the interface",
        "Note which component exposes it and which consumes it",
    ],
    examples: &[
        example("MCP Protocol", "Protocol clients use to reach the server"),
        example("CLI Command API", "Commands exposed by the CLI"),
        example("Docker API", "Interface to the Docker daemon"),
    ],
};

pub static FEATURE: KindGuidance = KindGuidance {
    instructions: &[
        "Look for capabilities that give value to users or other systems",
        "Describe what the system can do, not how it does it",
        "Features are implemented by components and modules",
        "Include both user-facing and system-facing capabilities",
        "Phrase features as capabilities rather than implementation details",
    ],
    examples: &[
        example("Project Initialization", "Create a new project"),
        example("Knowledge Graph Generation", "Build a knowledge graph from code"),
        example("Multi-project Support", "Work with several knowledge graph projects"),
    ],
};

pub static RESOURCE: KindGuidance = KindGuidance {
    instructions: &[
        "Look for external systems, services and libraries the code depends on",
        "Keep the dependencies that components or modules actually use",
        "Databases, third-party APIs and libraries all count",
        "Capture version information when it is available",
        "Include both runtime and development-time dependencies",
    ],
    examples: &[
        example("Neo4j Database", "Graph database storing the knowledge graph"),
        example("OpenAI API", "External service providing LLM capabilities"),
        example("Docker Engine", "Container runtime used for deployment"),
    ],
};

pub static CONCEPT: KindGuidance = KindGuidance {
    instructions: &[
        "Look for abstract ideas needed to understand the system",
        "Focus on domain terminology and architectural principles",
        "Concepts tend to recur across components and documentation",
        "Concepts explain why design decisions were made",
        "Use concepts to link implementation to domain understanding",
    ],
    examples: &[
        example("Knowledge Graph", "Core structure representing code relationships"),
        example("Temporal Versioning", "Tracking changes to the graph over time"),
        example("Model Context Protocol", "Framework for agent-tool communication"),
    ],
};
