const PROMPT_PREFIX: &str = "Summarize the article at this URL: ";

const PROMPT_STRUCTURE: &str = ". Provide the summary in markdown format with the following structure:

# {insert article name here}
## Key Points
- Point 1
- Point 2
- Point 3
## Main Ideas
1. First main idea
2. Second main idea
3. Third main idea

## Conclusion";

/// Interpolates the user's input (URL or pasted text) into the fixed template.
pub fn build_prompt(input: &str) -> String {
    let mut result = String::with_capacity(PROMPT_PREFIX.len() + input.len() + PROMPT_STRUCTURE.len());
    result.push_str(PROMPT_PREFIX);
    result.push_str(input);
    result.push_str(PROMPT_STRUCTURE);
    result
}
