//! The backlog for the Visual Workflow Builder MVP sprint, parsed from
//! SPRINT.md. Data only; the importer walks it without ever mutating it.

use crate::models::{Epic, Story, Task};

fn t(name: &'static str, estimate: &'static str) -> Task {
    Task {
        name,
        estimate,
        assignee: None,
    }
}

fn ta(name: &'static str, estimate: &'static str, assignee: &'static str) -> Task {
    Task {
        name,
        estimate,
        assignee: Some(assignee),
    }
}

pub fn backlog() -> Vec<Epic> {
    vec![
        Epic {
            name: "Canvas & Drag-Drop 🎨",
            description: "Users can drag nodes onto a canvas and connect them visually",
            story_points: 21,
            owner: "Dev 1 (Canvas & UX Specialist)",
            stories: vec![
                Story {
                    name: "Setup React Flow Canvas",
                    description: "As a developer, I want to set up the React Flow canvas infrastructure, so that we have a foundation for the visual builder",
                    story_points: Some(5),
                    assignee: "Dev 1",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "React Flow installed and configured",
                        "Canvas component renders with pan/zoom",
                        "Background grid visible",
                        "Controls (zoom in/out, fit view) working",
                    ],
                    tasks: vec![
                        t("Install @xyflow/react package", "1h"),
                        t("Create WorkflowCanvas.tsx component", "2h"),
                        t("Configure canvas controls (Background, Controls, MiniMap hidden)", "1h"),
                        t("Set up Zustand store for canvas state (nodes, edges)", "2h"),
                        t("Test: Canvas renders, pan/zoom works", "0.5h"),
                    ],
                },
                Story {
                    name: "Build Node Library Panel",
                    description: "As a user, I want to see all available node types in a left panel, so that I can drag them onto the canvas",
                    story_points: Some(5),
                    assignee: "Dev 2",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "Left panel shows 30 node types in categories",
                        "30 node types displayed with icons and labels",
                        "Search box filters nodes in real-time",
                        "Collapsible categories",
                    ],
                    tasks: vec![
                        t("Create NodeLibrary.tsx component", "2h"),
                        t("Define node type data structure (name, icon, category, description)", "1h"),
                        t("Implement search filter logic", "1h"),
                        t("Add category collapse/expand", "1h"),
                        t("Style panel (Tailwind CSS)", "1h"),
                        t("Test: All 30 nodes display, search works", "0.5h"),
                    ],
                },
                Story {
                    name: "Implement Drag-Drop from Library to Canvas",
                    description: "As a user, I want to drag nodes from the library onto the canvas, so that I can start building my workflow",
                    story_points: Some(8),
                    assignee: "Dev 1",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "Drag node from library → Drop on canvas → Node appears",
                        "Node has unique ID (generated)",
                        "Node positioned at drop location",
                        "Node shows visual feedback during drag",
                    ],
                    tasks: vec![
                        t("Implement drag handler on library nodes", "2h"),
                        t("Implement drop handler on canvas", "2h"),
                        t("Generate unique node IDs (uuid)", "0.5h"),
                        t("Add node to Zustand store on drop", "1h"),
                        t("Add visual feedback (drag ghost)", "1h"),
                        t("Test: Drag-drop adds node to canvas", "0.5h"),
                    ],
                },
                Story {
                    name: "Enable Node Connections",
                    description: "As a user, I want to connect nodes by dragging from output to input, so that I can define the workflow sequence",
                    story_points: Some(8),
                    assignee: "Dev 1",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "Drag from output port → Input port → Creates edge",
                        "Invalid connections prevented",
                        "Edge stored in Zustand",
                        "Visual feedback (animated edge during drag)",
                    ],
                    tasks: vec![
                        t("Define connection validation rules", "1h"),
                        t("Implement onConnect handler", "2h"),
                        t("Add edge to Zustand store", "1h"),
                        t("Style edges (curved lines, colors by node type)", "1h"),
                        t("Implement connection validation", "2h"),
                        t("Test: Valid connections work, invalid connections blocked", "1h"),
                    ],
                },
                Story {
                    name: "Create Custom Node Components",
                    description: "As a developer, I want to create custom React Flow node components for each type, so that nodes display correctly with icons, labels, and ports",
                    story_points: Some(5),
                    assignee: "Dev 2",
                    priority: "High",
                    acceptance_criteria: vec![
                        "4 node component types created",
                        "Each shows icon, label, status indicator",
                        "Input/output ports positioned correctly",
                        "Node styles match design",
                    ],
                    tasks: vec![
                        t("Create TriggerNode.tsx component", "1h"),
                        t("Create AgentNode.tsx component", "1h"),
                        t("Create ActionNode.tsx component", "1h"),
                        t("Create UtilityNode.tsx component", "1h"),
                        t("Add node type mapping (nodeTypes object)", "0.5h"),
                        t("Test: Nodes render with correct styles", "0.5h"),
                    ],
                },
            ],
        },
        Epic {
            name: "Node Library & Components 📦",
            description: "All 30 node types display correctly with visual indicators",
            story_points: 25,
            owner: "Dev 2 (Nodes & Config Specialist)",
            stories: vec![
                Story {
                    name: "Build Configuration Panel Layout",
                    description: "As a user, I want to see a configuration panel when I select a node, so that I can configure its parameters",
                    story_points: Some(3),
                    assignee: "Dev 2",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "Right panel opens when node selected",
                        "Panel closes when node deselected or close button clicked",
                        "Panel header shows node name and type",
                        "Panel content is scrollable",
                    ],
                    tasks: vec![
                        t("Create ConfigPanel.tsx component", "1h"),
                        t("Wire up node selection (click → select in Zustand)", "1h"),
                        t("Show/hide panel based on selectedNode state", "0.5h"),
                        t("Style panel layout (header, body, footer)", "1h"),
                        t("Test: Panel opens/closes correctly", "0.5h"),
                    ],
                },
            ],
        },
        Epic {
            name: "Configuration System ⚙️",
            description: "Users can configure each node type with specific parameters",
            story_points: 34,
            owner: "Dev 2 (Nodes & Config Specialist)",
            stories: vec![
                Story {
                    name: "Implement Dynamic Configuration Forms (16 Original + 14 Shopify)",
                    description: "As a user, I want to see a form specific to the selected node type, so that I can configure its parameters",
                    story_points: Some(21),
                    assignee: "Dev 2",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "Form fields dynamically rendered based on node type",
                        "30 configuration forms (16 original + 14 Shopify)",
                        "Fields: Text input, textarea, dropdown, checkbox, radio, file upload",
                        "Form state managed locally",
                        "All Shopify forms included",
                    ],
                    tasks: vec![
                        ta("Define configuration schema for each node type", "3h", "Dev 1"),
                        t("Create WhatsAppTriggerConfig.tsx", "1h"),
                        t("Create EmailTriggerConfig.tsx", "1h"),
                        t("Create VoiceTriggerConfig.tsx", "1h"),
                        t("Create ShopifyOrderCreatedConfig.tsx", "1h"),
                        t("Create ShopifyOrderFulfilledConfig.tsx", "1h"),
                        t("Create ShopifyOrderDeliveredConfig.tsx", "1h"),
                        t("Create ShopifyOrderCancelledConfig.tsx", "1h"),
                        t("Create ShopifyTimeReminderConfig.tsx", "1.5h"),
                        t("Create ConversationalAgentConfig.tsx", "1.5h"),
                        t("Create DecisionAgentConfig.tsx", "1.5h"),
                        t("Create ReasoningAgentConfig.tsx", "1.5h"),
                        t("Create SendWhatsAppConfig.tsx", "1h"),
                        t("Create SendEmailConfig.tsx", "1h"),
                        t("Create InitiateCallConfig.tsx", "1h"),
                        t("Create UpdateCRMConfig.tsx", "1h"),
                        t("Create ShopifyGetProductConfig.tsx", "1h"),
                        t("Create ShopifyGetAllProductsConfig.tsx", "1h"),
                        t("Create ShopifyGetOrderConfig.tsx", "1h"),
                        t("Create ShopifyAuthCustomerConfig.tsx", "1h"),
                        t("Create ShopifyGetShopConfig.tsx", "1h"),
                        t("Create ShopifyCreateOrderConfig.tsx", "2h"),
                        t("Create ShopifyConfirmOrderConfig.tsx", "1h"),
                        t("Create ShopifyCancelOrderConfig.tsx", "1h"),
                        t("Create ShopifyUpdateAddressConfig.tsx", "1h"),
                        t("Create TextGeneratorConfig.tsx", "1h"),
                        t("Create SentimentCalcConfig.tsx", "0.5h"),
                        t("Create IntentCalcConfig.tsx", "0.5h"),
                        t("Create VulnScannerConfig.tsx", "0.5h"),
                        t("Create ReasonAnalyzerConfig.tsx", "0.5h"),
                        t("Create CustomAIUtilityConfig.tsx", "1h"),
                        t("Create config form router (switch based on node type)", "1h"),
                        t("Test: Each config form renders correctly", "2h"),
                    ],
                },
                Story {
                    name: "Add Variable Insertion UI",
                    description: "As a user, I want to insert variables (e.g., {{phone_number}}) into text fields, so that I can use dynamic data from previous steps",
                    story_points: Some(3),
                    assignee: "Dev 2",
                    priority: "High",
                    acceptance_criteria: vec![
                        "\"Insert Variable\" dropdown in text fields",
                        "Lists available variables from previous steps",
                        "Clicking variable inserts {{variable_name}} at cursor",
                    ],
                    tasks: vec![
                        t("Create VariableInserter component", "2h"),
                        t("Compute available variables (trace back from current node)", "2h"),
                        t("Insert variable at cursor position", "1h"),
                        t("Test: Variable insertion works", "0.5h"),
                    ],
                },
                Story {
                    name: "Implement Form Validation",
                    description: "As a user, I want to see validation errors when I miss required fields, so that I can fix my configuration",
                    story_points: Some(3),
                    assignee: "Dev 2",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "Required fields marked with *",
                        "Validation runs on blur and on save",
                        "Error messages displayed inline",
                        "Node shows error indicator if misconfigured",
                    ],
                    tasks: vec![
                        t("Add validation schema (Yup or Zod)", "2h"),
                        t("Implement inline validation", "1h"),
                        t("Update node visual state (red border if error)", "1h"),
                        t("Test: Validation catches errors", "1h"),
                    ],
                },
                Story {
                    name: "Save Configuration to Node",
                    description: "As a user, I want my configuration to save when I click \"Save\", so that my settings persist",
                    story_points: Some(3),
                    assignee: "Dev 2",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "\"Save Configuration\" button in panel",
                        "Configuration saved to node data (Zustand)",
                        "Node marked as \"configured\" (visual indicator)",
                        "Auto-save on blur (optional, nice-to-have)",
                    ],
                    tasks: vec![
                        t("Implement save handler (update node in Zustand)", "1h"),
                        t("Update node visual state (checkmark if configured)", "0.5h"),
                        t("Add success toast notification", "0.5h"),
                        t("Test: Configuration persists after save", "1h"),
                    ],
                },
            ],
        },
        Epic {
            name: "Workflow Execution Engine 🚀",
            description: "Workflows execute correctly with all 30 node types",
            story_points: 29,
            owner: "Dev 3 (Execution Engine Specialist)",
            stories: vec![
                Story {
                    name: "Design Execution Engine Architecture",
                    description: "As a developer, I want to design the execution engine architecture, so that workflows execute correctly",
                    story_points: Some(5),
                    assignee: "Dev 3",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "Execution flow documented (sequential step processing)",
                        "Context passing strategy defined",
                        "Error handling strategy defined",
                        "Database schemas created (workflow_executions, execution_logs)",
                    ],
                    tasks: vec![
                        ta("Document execution flow", "1h", "Dev 1"),
                        t("Create execution.schema.ts (Execution model)", "1h"),
                        t("Create execution-log.schema.ts (ExecutionLog model)", "1h"),
                        t("Create indexes (workflowId, executionId, status)", "0.5h"),
                        ta("Review schema with team", "0.5h", "Dev 1"),
                    ],
                },
                Story {
                    name: "Build Execution Engine Core",
                    description: "As a developer, I want to build the core execution engine, so that workflows can execute step-by-step",
                    story_points: Some(8),
                    assignee: "Dev 3",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "ExecutionEngineService class created",
                        "executeWorkflow() method implemented",
                        "Sequential step execution (load step → execute → move to next)",
                        "Context passing (output of step N becomes input of step N+1)",
                        "Error handling (stop on error, log error)",
                    ],
                    tasks: vec![
                        t("Create execution-engine.service.ts", "1h"),
                        t("Implement loadWorkflow() (fetch from DB)", "1h"),
                        t("Implement loadSteps() (fetch all steps)", "1h"),
                        t("Implement executeWorkflow() (main loop)", "3h"),
                        t("Implement context passing logic", "1h"),
                        t("Implement error handling (try-catch, log)", "1h"),
                        t("Test: Execute simple workflow (Trigger → Action)", "1h"),
                    ],
                },
                Story {
                    name: "Implement Step Executor for All 30 Node Types",
                    description: "As a developer, I want to implement step-specific execution logic, so that each node type executes correctly",
                    story_points: Some(13),
                    assignee: "Dev 3",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "StepExecutorService class created",
                        "execute() method routes to correct handler based on stepType",
                        "Handlers for all 30 node types (8 triggers + 3 agents + 13 actions + 6 utilities)",
                        "Variable replacement ({{var}} → actual value)",
                        "Shopify integration working",
                    ],
                    tasks: vec![
                        t("Create step-executor.service.ts", "1h"),
                        t("Implement execute() method (routing logic)", "1h"),
                        t("Implement executeTrigger() for 8 triggers", "2h"),
                        t("Implement executeAgent() for 3 agents (call BotCore API)", "2h"),
                        t("Implement executeAction() for 13 actions (4 original + 9 Shopify)", "4h"),
                        t("Implement executeUtility() for 6 utilities (call BotCore utility APIs)", "2h"),
                        t("Implement replaceVariables() helper", "1h"),
                        t("Implement Shopify API integration", "3h"),
                        t("Test: Each of 30 node types executes correctly", "3h"),
                    ],
                },
                Story {
                    name: "Create Execute Workflow API Endpoint",
                    description: "As a user, I want to execute a workflow via API, so that my published workflows can run",
                    story_points: Some(3),
                    assignee: "Dev 3",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "POST /workFlow/:id/execute endpoint created",
                        "Accepts triggerData in request body",
                        "Returns executionId and status",
                        "Saves execution record to DB",
                    ],
                    tasks: vec![
                        t("Create execution.controller.ts", "1h"),
                        t("Implement POST /workFlow/:id/execute", "2h"),
                        t("Integrate with ExecutionEngineService", "1h"),
                        t("Test: API endpoint works", "1h"),
                    ],
                },
            ],
        },
        Epic {
            name: "Validation & Publish ✅",
            description: "Users can validate workflows before publishing to catch errors early",
            story_points: 13,
            owner: "Dev 3 (lead), Dev 1 & Dev 2 (support)",
            stories: vec![
                Story {
                    name: "Implement Workflow Validation",
                    description: "As a user, I want to validate my workflow before publishing, so that I catch errors early",
                    story_points: Some(5),
                    assignee: "Dev 3",
                    priority: "High",
                    acceptance_criteria: vec![
                        "POST /workFlow/:id/validate endpoint",
                        "Checks: All nodes configured, no orphan nodes, valid connections, at least one trigger",
                        "Returns list of errors (if any)",
                        "\"Publish\" button disabled if validation fails",
                    ],
                    tasks: vec![
                        t("Implement validateWorkflow() method", "2h"),
                        t("Create POST /workFlow/:id/validate endpoint", "1h"),
                        ta("Call validation on \"Publish\" click", "0.5h", "Dev 2"),
                        ta("Display validation errors in modal", "1h", "Dev 2"),
                        t("Test: Validation catches errors", "1h"),
                    ],
                },
                Story {
                    name: "Implement Publish Workflow",
                    description: "As a user, I want to publish my workflow after validation passes, so that it becomes executable",
                    story_points: Some(3),
                    assignee: "Dev 3",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "POST /workFlow/:id/publish endpoint",
                        "Workflow status changes to PUBLISHED",
                        "Only validated workflows can be published",
                        "Published workflows are executable",
                    ],
                    tasks: vec![
                        t("Implement POST /workFlow/:id/publish endpoint", "2h"),
                        t("Add workflow status transition logic", "1h"),
                        t("Test: Publish workflow works", "1h"),
                    ],
                },
            ],
        },
        Epic {
            name: "Monitoring Dashboard 📊",
            description: "Users can monitor workflow executions with detailed logs",
            story_points: 29,
            owner: "Dev 4 (Monitoring Dashboard Specialist)",
            stories: vec![
                Story {
                    name: "Create Monitoring Page Layout",
                    description: "As a user, I want a monitoring page to see all executions, so that I can track workflow performance",
                    story_points: Some(5),
                    assignee: "Dev 4",
                    priority: "High",
                    acceptance_criteria: vec![
                        "Monitoring page accessible from workflow detail",
                        "Shows execution list (table)",
                        "Columns: executionId, status, startedAt, duration",
                        "Filters: status (all/completed/failed), date range",
                    ],
                    tasks: vec![
                        t("Create WorkflowMonitoring.tsx page", "2h"),
                        t("Create execution list table", "3h"),
                        t("Add filters (status, date range)", "2h"),
                        t("Add \"View Details\" button per execution", "1h"),
                        t("Style page", "1h"),
                        t("Test: Page renders, filters work", "1h"),
                    ],
                },
                Story {
                    name: "Implement Get Executions API",
                    description: "As a developer, I want an API to fetch workflow executions, so that the monitoring page can display them",
                    story_points: Some(3),
                    assignee: "Dev 3",
                    priority: "High",
                    acceptance_criteria: vec![
                        "GET /workFlow/:id/executions endpoint",
                        "Supports pagination (page, limit)",
                        "Supports filters (status, dateRange)",
                        "Returns execution list with metadata",
                    ],
                    tasks: vec![
                        t("Implement GET /workFlow/:id/executions", "2h"),
                        t("Add pagination", "1h"),
                        t("Add filters (status, dateRange)", "1h"),
                        t("Test: Endpoint returns executions", "1h"),
                    ],
                },
                Story {
                    name: "Build Execution Detail View",
                    description: "As a user, I want to see step-by-step details of an execution, so that I can debug failures",
                    story_points: Some(8),
                    assignee: "Dev 4",
                    priority: "High",
                    acceptance_criteria: vec![
                        "Click \"View Details\" → Expands execution row",
                        "Shows step-by-step logs: stepId, status, input, output, duration",
                        "Failed steps show error message",
                        "\"View Raw JSON\" button (optional)",
                        "\"Retry\" button for failed executions",
                    ],
                    tasks: vec![
                        t("Create ExecutionDetail component", "3h"),
                        t("Fetch execution logs (GET /execution/:id)", "1h"),
                        t("Display step-by-step logs (list)", "2h"),
                        t("Add \"Retry\" button", "1h"),
                        t("Style detail view", "1h"),
                        t("Test: Detail view renders correctly", "1h"),
                    ],
                },
                Story {
                    name: "Implement Get Execution Details API",
                    description: "As a developer, I want an API to fetch execution details with logs, so that the detail view can display them",
                    story_points: Some(3),
                    assignee: "Dev 3",
                    priority: "High",
                    acceptance_criteria: vec![
                        "GET /execution/:id endpoint",
                        "Returns execution record + all step logs",
                        "Step logs ordered by stepOrder",
                    ],
                    tasks: vec![
                        t("Implement GET /execution/:id", "2h"),
                        t("Join execution + logs (MongoDB aggregation or multiple queries)", "1h"),
                        t("Test: Endpoint returns correct data", "1h"),
                    ],
                },
                Story {
                    name: "Implement Retry Failed Execution",
                    description: "As a user, I want to retry a failed execution, so that I can recover from transient errors",
                    story_points: Some(3),
                    assignee: "Dev 3",
                    priority: "Medium",
                    acceptance_criteria: vec![
                        "POST /execution/:id/retry endpoint",
                        "Creates new execution with same triggerData",
                        "Returns new executionId",
                    ],
                    tasks: vec![
                        t("Implement POST /execution/:id/retry", "2h"),
                        t("Fetch original execution triggerData", "0.5h"),
                        t("Call executeWorkflow() with same data", "0.5h"),
                        t("Test: Retry creates new execution", "1h"),
                    ],
                },
                Story {
                    name: "Add Polling Refresh",
                    description: "As a user, I want the monitoring page to refresh automatically, so that I see new executions without manual refresh",
                    story_points: Some(2),
                    assignee: "Dev 4",
                    priority: "Medium",
                    acceptance_criteria: vec![
                        "Page polls GET /workFlow/:id/executions every 5 seconds",
                        "\"Refresh\" button for manual refresh",
                        "Stop polling when user navigates away",
                    ],
                    tasks: vec![
                        t("Implement polling with setInterval", "1h"),
                        t("Add manual \"Refresh\" button", "0.5h"),
                        t("Clean up interval on unmount", "0.5h"),
                        t("Test: Polling updates list", "1h"),
                    ],
                },
            ],
        },
        Epic {
            name: "Integration & Testing ✨",
            description: "End-to-end integration with existing BotWot backend + bug fixes",
            story_points: 21,
            owner: "All Developers",
            stories: vec![
                Story {
                    name: "Integrate with Existing Workflow APIs",
                    description: "As a developer, I want to use existing BotWot workflow APIs, so that we don't duplicate backend logic",
                    story_points: Some(5),
                    assignee: "Dev 1",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "POST /workFlow/create called on canvas save",
                        "POST /workFlow/step called to save each node",
                        "PUT /workFlow/step/:wfId/:stepId called to update nextStepId",
                        "POST /workFlow/publish/:id called on publish",
                    ],
                    tasks: vec![
                        t("Document API integration points", "1h"),
                        ta("Implement saveWorkflow() (calls POST /workFlow/create)", "2h", "Dev 2"),
                        ta("Implement saveStep() (calls POST /workFlow/step)", "2h", "Dev 2"),
                        ta("Implement updateStep() (calls PUT /workFlow/step)", "1h", "Dev 2"),
                        ta("Implement publishWorkflow() (calls POST /workFlow/publish)", "1h", "Dev 2"),
                        t("Test: Workflow saved correctly to DB", "1h"),
                    ],
                },
                Story {
                    name: "Implement JWT Auth Integration",
                    description: "As a developer, I want to use existing JWT auth, so that only authenticated users can access the builder",
                    story_points: Some(3),
                    assignee: "Dev 1",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "All API calls include JWT token (Authorization: Bearer <token>)",
                        "401 responses redirect to login",
                        "User context (userId, orgId) available in frontend",
                    ],
                    tasks: vec![
                        t("Configure axios interceptor (add JWT to headers)", "1h"),
                        t("Handle 401 responses (redirect to login)", "1h"),
                        t("Fetch user context on app load", "0.5h"),
                        t("Test: Auth works, 401 redirects", "1h"),
                    ],
                },
                Story {
                    name: "Add Multi-Tenant Isolation",
                    description: "As a developer, I want to ensure workflows are isolated by orgId, so that organizations don't see each other's data",
                    story_points: Some(3),
                    assignee: "Dev 3",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "All queries filter by userId + orgId",
                        "All workflow creation includes orgId",
                        "Test: User A can't access User B's workflows",
                    ],
                    tasks: vec![
                        t("Add orgId filter to all queries", "2h"),
                        t("Add orgId to workflow creation", "0.5h"),
                        t("Test: Multi-tenancy works", "1h"),
                    ],
                },
                Story {
                    name: "Write E2E Test",
                    description: "As a developer, I want an E2E test for the complete user journey, so that we ensure everything works together",
                    story_points: Some(5),
                    assignee: "Dev 1",
                    priority: "High",
                    acceptance_criteria: vec![
                        "E2E test using Playwright or Cypress",
                        "Test flow: Login → Create workflow → Add nodes → Connect → Configure → Test → Publish → Monitor",
                    ],
                    tasks: vec![
                        t("Setup Playwright/Cypress", "1h"),
                        t("Write E2E test script", "4h"),
                        t("Run test, fix issues", "2h"),
                    ],
                },
                Story {
                    name: "Bug Fixes & Refinements",
                    description: "As a team, I want to fix bugs discovered during testing, so that the MVP is stable",
                    story_points: Some(5),
                    assignee: "All Devs",
                    priority: "Highest",
                    acceptance_criteria: vec![
                        "Zero critical bugs",
                        "Zero P0 bugs blocking release",
                        "All E2E tests pass",
                    ],
                    tasks: vec![
                        t("Triage bugs from testing", "2h"),
                        t("Fix critical bugs", "8h"),
                        t("Fix high-priority bugs", "8h"),
                        t("Retest after fixes", "2h"),
                    ],
                },
            ],
        },
    ]
}
