//! Prompt template and sampling configuration for indicator extraction.
//!
//! Kept as data so prompt iterations never touch handler logic. The
//! `{case_info}` placeholder is substituted verbatim before sending.

use service_core::genai::GenerationParams;

/// Extraction prompt: indicator criteria plus strict raw-JSON formatting
/// instructions.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"
    Analyze the following child welfare case information and extract positive and negative indicators for reunification. For each indicator, provide only direct quotes from the case information as evidence.

    Case Information:
    {case_info}

    Based on the given information, provide:
    1. Positive indicators for reunification
    2. Negative indicators against reunification
    3. An overall prognosis analysis (without a numerical score)

    Use the following criteria to identify indicators:

    Positive Indicators:
    1. Strong Parent-Child Relationship: Evidence of a positive and secure bond, parent's ability to respond to child's needs, demonstrate empathy, modify parenting approaches, and accept responsibility for past issues. Evidence of previously effective parenting shown by the child's healthy development.
    2. Parental Stability and Functioning: Stability in physical and mental health, economic stability (employment, housing, financial management), freedom from addiction, and consistent contact with the child. Historical ability to meet the child's needs, even with past impairments.
    3. Supportive Social Systems: Strength and reliability of the parent's support network, including positive relationships encouraging safe parenting, kin system helping with childcare, and practical support resources. A support system that recognizes both strengths and limitations of the parent.
    4. Recent and Situational Problems: Issues leading to removal are recent and situational rather than chronic and deeply ingrained, indicating potential for change within a timeframe aligning with the child's best interests.
    5. Parent's Positive Childhood Experiences: Parent had consistent caregiving and their needs met as a child, indicating potential to provide a stable and nurturing environment.

    Negative Indicators:
    1. Extreme Abuse or Neglect: History of extreme abuse or neglect, especially involving death or serious harm to another child, repeated and premeditated harm to the current child, or termination of parental rights to a sibling.
    2. Severe and Untreated Mental Illness: Diagnosed severe mental illnesses not responding to treatment or remaining uncontrolled, such as schizophrenia, psychosis, severe bipolar disorder, treatment-resistant depression, or personality disorders with functional impairments.
    3. Chronic and Persistent Problems: Ongoing issues like repeated CFS interventions, unsuccessful previous interventions, ongoing substance abuse, criminal involvement, or domestic violence.
    4. Parental Ambivalence and Lack of Commitment: Signs of inconsistent contact, uncertainty about parenting desires, expressed dislike towards the child, repeated acknowledgment of parenting difficulties, or abandonment of the child.
    5. Cumulative Risk Factors: Consider the total number and severity of risk factors present.

    For each indicator found, provide:
    1. The category of the indicator
    2. A description containing only direct quotes from the case information as evidence. If there are multiple pieces of evidence, separate them with a new line.

    For the prognosis assessment, you may provide a summarization of the indicators and evidence collected.

    IMPORTANT: Respond ONLY with a raw JSON object, without any markdown formatting or code block syntax. The response should start with a curly brace and end with a curly brace.

    The JSON object should follow this structure:
    {
        "positive_indicators": [
            {"category": "string", "description": "string"},
            ...
        ],
        "negative_indicators": [
            {"category": "string", "description": "string"},
            ...
        ],
        "overall_prognosis": {"assessment": "string"}
    }

    Remember: Your response must be ONLY the JSON object, starting with { and ending with }, with no additional text, formatting, or markdown syntax.
    "#;

/// Sampling parameters for extraction: low temperature and diversity for
/// consistent JSON output, large output cap.
pub fn extraction_params() -> GenerationParams {
    GenerationParams {
        temperature: Some(0.2),
        top_p: Some(1.0),
        top_k: Some(32),
        max_output_tokens: Some(8192),
    }
}

/// Build the extraction prompt for the given case information.
pub fn extraction_prompt(case_info: &str) -> String {
    EXTRACTION_PROMPT_TEMPLATE.replace("{case_info}", case_info)
}
